//! Session lifecycle state machine.
//!
//! The session moves through three logical states:
//!
//! ```text
//!                      ┌────────────────► Authenticated
//!                      │ initialize          │    ▲
//!                      │ (token restores)    │    │
//!  Uninitialized ──────┤               logout│    │ login /
//!                      │ initialize          │    │ register
//!                      │ (no/bad token)      ▼    │
//!                      └────────────────► Unauthenticated
//! ```
//!
//! [`SessionManager`] drives the transitions; [`SessionState`] is the
//! observable record. `initialized` is one-way: once the startup check
//! has run, every later state keeps it set.

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::SessionState;
