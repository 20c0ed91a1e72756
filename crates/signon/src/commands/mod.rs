//! Command implementations for the signon CLI.
//!
//! Each submodule implements one subcommand. [`manager`] wires the core
//! session machinery to the local token file and the configured identity
//! service.

pub mod login;
pub mod logout;
pub mod register;
pub mod status;
pub mod whoami;

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use signon_core::SessionManager;
use signon_core::identity::HttpIdentityClient;
use signon_core::navigate::Navigator;
use signon_core::store::FileTokenStore;

use crate::config::Config;

/// Navigator that prints the sign-in hint, the CLI's counterpart of
/// routing back to a sign-in screen.
pub struct SignInHint;

impl Navigator for SignInHint {
    fn go_to_sign_in(&self) {
        println!("  Sign in with {}", "signon login <identifier>".cyan());
    }
}

/// Build the session manager for the configured service and token path.
pub fn manager(config: &Config) -> Result<SessionManager> {
    debug!("using identity service at {}", config.service.url);
    let store = Arc::new(FileTokenStore::new(config.token_path()));
    let identity = Arc::new(HttpIdentityClient::new(&config.service.url, store.clone())?);
    Ok(SessionManager::new(store, identity, Arc::new(SignInHint)))
}
