//! Shared types for signon-core.

use serde::{Deserialize, Serialize};

/// Profile of a signed-in user, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}
