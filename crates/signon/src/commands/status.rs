//! Local session status command.

use std::fs;
use std::os::unix::fs::PermissionsExt;

use anyhow::Result;
use colored::Colorize;

use signon_core::store::{FileTokenStore, TokenStore};

use crate::config::Config;

/// Show the local session status without touching the network.
pub async fn execute(json: bool, config: &Config) -> Result<()> {
    let store = FileTokenStore::new(config.token_path());
    let token = store.read().await?;

    if json {
        let report = serde_json::json!({
            "service_url": config.service.url,
            "token_path": store.path().display().to_string(),
            "token_present": token.is_some(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Session Status".bold());
    println!("{}", "─".repeat(40));
    println!("Service:   {}", config.service.url);

    match token {
        Some(token) => {
            println!(
                "Token:     {} ({}...)",
                "Present".green(),
                prefix(&token).yellow()
            );

            // Check file permissions
            let metadata = fs::metadata(store.path())?;
            let mode = metadata.permissions().mode() & 0o777;
            if mode == 0o600 {
                println!("Perms:     {} (0600)", "Secure".green());
            } else {
                println!("Perms:     {} ({:o})", "Insecure".yellow(), mode);
            }
        }
        None => {
            println!("Token:     {}", "Not signed in".red());
        }
    }

    Ok(())
}

/// Short display prefix; the full token is never printed.
fn prefix(token: &str) -> &str {
    &token[..12.min(token.len())]
}
