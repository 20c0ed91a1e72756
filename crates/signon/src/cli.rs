//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

/// signon - session management CLI
///
/// Sign in to the identity service and manage the local session.
#[derive(Parser, Debug)]
#[command(name = "signon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with an identifier and secret
    Login {
        /// Account identifier (email or username)
        identifier: String,

        /// Secret; prompted for interactively when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Email address for the new account
        #[arg(long)]
        email: Option<String>,

        /// Display name for the new account
        #[arg(long)]
        name: Option<String>,

        /// Secret; prompted for interactively when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and clear the persisted token
    Logout,

    /// Show the local session status without touching the network
    Status {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check the session against the identity service and print the profile
    Whoami,

    /// Show version information
    Version,
}
