//! signon-core - Core library for signon
//!
//! Client-side authentication session machinery, shared by the signon
//! CLI and other embedders:
//!
//! - **session**: the session lifecycle state machine
//! - **store**: durable persistence of the credential token
//! - **identity**: the identity service client
//! - **navigate**: the post-logout navigation seam
//!
//! The identity service itself is remote; this crate only talks to it
//! through [`identity::IdentityClient`], so embedders can swap in their
//! own transport.

pub mod error;
pub mod identity;
pub mod navigate;
pub mod session;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use session::{SessionManager, SessionState};
pub use types::UserProfile;
