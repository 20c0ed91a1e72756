//! Identity service client for signon-core.
//!
//! [`IdentityClient`] is the seam the session state machine talks through;
//! [`HttpIdentityClient`] is the production implementation speaking JSON
//! over HTTP to the identity service.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::TokenStore;
use crate::types::UserProfile;

/// Network operations the session lifecycle delegates to the identity
/// service.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Verify an identifier/secret pair, returning a fresh session token.
    async fn verify_credentials(&self, identifier: &str, secret: &str) -> Result<String>;

    /// Create an account from an opaque registration payload, returning a
    /// fresh session token.
    async fn create_account(&self, payload: &serde_json::Value) -> Result<String>;

    /// Fetch the profile of the user owning the currently active token.
    async fn fetch_profile(&self) -> Result<UserProfile>;
}

/// HTTP client for the identity service.
///
/// Authenticated requests read the bearer token from the shared
/// [`TokenStore`] at call time, so whichever token was last persisted is
/// the one sent.
pub struct HttpIdentityClient {
    base_url: String,
    client: reqwest::Client,
    store: Arc<dyn TokenStore>,
}

impl HttpIdentityClient {
    /// Create a client for the identity service at `base_url`.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::identity(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            store,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Currently active token, or [`Error::MissingAuth`] when the store is
    /// empty.
    async fn bearer(&self) -> Result<String> {
        self.store.read().await?.ok_or(Error::MissingAuth)
    }

    /// POST a body to a token-issuing endpoint and decode the token.
    async fn request_token<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.endpoint(path);
        debug!("identity request: POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let response = check_status(response).await?;
        let issued: TokenResponse = response.json().await?;
        Ok(issued.token)
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn verify_credentials(&self, identifier: &str, secret: &str) -> Result<String> {
        let body = LoginRequest { identifier, secret };
        self.request_token("/api/auth/login", &body).await
    }

    async fn create_account(&self, payload: &serde_json::Value) -> Result<String> {
        self.request_token("/api/auth/register", payload).await
    }

    async fn fetch_profile(&self) -> Result<UserProfile> {
        let token = self.bearer().await?;
        let url = self.endpoint("/api/auth/me");
        debug!("identity request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(Error::identity(format!(
        "identity service returned {}: {}",
        status, detail
    )))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request/Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Credential verification request body.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    secret: &'a str,
}

/// Token issuance response, shared by login and register.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    fn client(store: Arc<dyn TokenStore>) -> HttpIdentityClient {
        HttpIdentityClient::new("http://localhost:3000/", store).unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = client(Arc::new(MemoryTokenStore::new()));
        // Trailing slash on the base URL is trimmed at construction
        assert_eq!(
            client.endpoint("/api/auth/me"),
            "http://localhost:3000/api/auth/me"
        );
    }

    #[test]
    fn test_token_response_decoding() {
        let issued: TokenResponse = serde_json::from_str(r#"{"token": "tok-abc123"}"#).unwrap();
        assert_eq!(issued.token, "tok-abc123");
    }

    #[test]
    fn test_login_request_encoding() {
        let body = LoginRequest {
            identifier: "ana@example.com",
            secret: "hunter2",
        };
        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(encoded["identifier"], "ana@example.com");
        assert_eq!(encoded["secret"], "hunter2");
    }

    #[tokio::test]
    async fn test_fetch_profile_without_token_fails_before_any_request() {
        // Hitting the network would surface a connection error, not
        // MissingAuth
        let store = Arc::new(MemoryTokenStore::new());
        let client = HttpIdentityClient::new("http://localhost:9", store).unwrap();

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, Error::MissingAuth));
    }

    #[tokio::test]
    async fn test_bearer_reads_latest_token() {
        let store = Arc::new(MemoryTokenStore::with_token("tok-old"));
        let client = client(store.clone());
        assert_eq!(client.bearer().await.unwrap(), "tok-old");

        store.write("tok-new").await.unwrap();
        assert_eq!(client.bearer().await.unwrap(), "tok-new");
    }
}
