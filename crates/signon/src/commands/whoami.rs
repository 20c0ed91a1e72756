//! Remote session check command.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

/// Run the startup session check against the identity service and print
/// the restored profile.
pub async fn execute(config: &Config) -> Result<()> {
    let manager = super::manager(config)?;
    manager.initialize().await;

    match manager.state().user {
        Some(user) => {
            println!(
                "{} Signed in as {} (id {})",
                "✓".green(),
                user.name.bold(),
                user.id
            );
            if let Some(email) = user.email {
                println!("  {}", email);
            }
        }
        None => {
            println!("{} No active session", "✗".red());
            println!("  Sign in with {}", "signon login <identifier>".cyan());
        }
    }

    Ok(())
}
