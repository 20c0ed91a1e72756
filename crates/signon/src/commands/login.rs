//! Sign-in command.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

/// Sign in and persist the issued token.
pub async fn execute(identifier: String, password: Option<String>, config: &Config) -> Result<()> {
    let secret = match password {
        Some(secret) => secret,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    let manager = super::manager(config)?;
    manager.initialize().await;

    println!("{} Signing in to {}...", "→".cyan(), config.service.url);
    match manager.login(&identifier, &secret).await {
        Ok(()) => {
            let state = manager.state();
            let name = state.user.map(|u| u.name).unwrap_or(identifier);
            println!("{} Signed in as {}", "✓".green(), name.bold());
            println!(
                "  Token saved to {}",
                config.token_path().display().to_string().cyan()
            );
        }
        Err(err) => {
            println!("{} Sign-in failed: {}", "✗".red(), err);
        }
    }

    Ok(())
}
