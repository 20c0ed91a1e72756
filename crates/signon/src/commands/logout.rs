//! Sign-out command.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

/// Clear the persisted token and reset the session.
pub async fn execute(config: &Config) -> Result<()> {
    let manager = super::manager(config)?;
    manager.initialize().await;

    let had_session = manager.state().authenticated;
    println!("{} Clearing local session...", "→".cyan());
    manager.logout().await;

    if had_session {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} No active session; local token cleared anyway", "✓".green());
    }

    Ok(())
}
