//! Account creation command.

use anyhow::Result;
use colored::Colorize;
use serde_json::{Value, json};

use crate::config::Config;

/// Create an account and establish a session with the issued token.
pub async fn execute(
    email: Option<String>,
    name: Option<String>,
    password: Option<String>,
    config: &Config,
) -> Result<()> {
    let email: String = match email {
        Some(email) => email,
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()?,
    };
    let name: String = match name {
        Some(name) => name,
        None => dialoguer::Input::new().with_prompt("Name").interact_text()?,
    };
    let secret = match password {
        Some(secret) => secret,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let manager = super::manager(config)?;
    manager.initialize().await;

    println!("{} Creating account for {}...", "→".cyan(), email);
    match manager
        .register(&registration_payload(&email, &name, &secret))
        .await
    {
        Ok(()) => {
            println!(
                "{} Account created, signed in as {}",
                "✓".green(),
                name.bold()
            );
        }
        Err(err) => {
            // Registration failures surface verbatim and leave any
            // existing session untouched
            println!("{} Registration failed: {}", "✗".red(), err);
        }
    }

    Ok(())
}

/// Opaque payload forwarded to the identity service.
fn registration_payload(email: &str, name: &str, secret: &str) -> Value {
    json!({
        "email": email,
        "name": name,
        "password": secret,
    })
}
