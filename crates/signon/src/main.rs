//! signon - Session management CLI
//!
//! Sign in to the identity service, keep the session token locally, and
//! restore the session on startup.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("signon=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load()?;

    // Execute command
    match cli.command {
        Commands::Login {
            identifier,
            password,
        } => commands::login::execute(identifier, password, &config).await,
        Commands::Register {
            email,
            name,
            password,
        } => commands::register::execute(email, name, password, &config).await,
        Commands::Logout => commands::logout::execute(&config).await,
        Commands::Status { json } => commands::status::execute(json, &config).await,
        Commands::Whoami => commands::whoami::execute(&config).await,
        Commands::Version => {
            println!("signon {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
