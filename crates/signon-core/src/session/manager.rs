//! Session lifecycle orchestration.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::identity::IdentityClient;
use crate::navigate::Navigator;
use crate::store::TokenStore;
use crate::types::UserProfile;

use super::state::{SessionAction, SessionState, reduce};

/// Owns the session state and drives the four lifecycle transitions.
///
/// The state lives in a `watch` channel. Each transition does its async
/// work first and then applies its outcome in one
/// [`watch::Sender::send_modify`] call; no lock is held across an await.
/// Overlapping transitions are not serialized against each other, so
/// each emits exactly one final state and the last to emit wins.
pub struct SessionManager {
    state: watch::Sender<SessionState>,
    store: Arc<dyn TokenStore>,
    identity: Arc<dyn IdentityClient>,
    navigator: Arc<dyn Navigator>,
}

impl SessionManager {
    /// Create a manager in the uninitialized state.
    pub fn new(
        store: Arc<dyn TokenStore>,
        identity: Arc<dyn IdentityClient>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            state,
            store,
            identity,
            navigator,
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes. The receiver observes the state after
    /// each completed transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn apply(&self, action: SessionAction) {
        self.state.send_modify(|state| *state = reduce(state, action));
    }

    /// Startup check: restore the session behind a persisted token, if
    /// any. Runs once per process; later calls are no-ops. Failures are
    /// absorbed into the unauthenticated outcome, this never raises.
    pub async fn initialize(&self) {
        if self.state().initialized {
            debug!("session already initialized, skipping startup check");
            return;
        }

        let user = match self.restore_session().await {
            Ok(user) => user,
            Err(err) => {
                // The persisted token stays in place for a later retry;
                // only the in-memory state comes up unauthenticated.
                warn!("startup session check failed: {}", err);
                None
            }
        };
        self.apply(SessionAction::Initialize { user });
    }

    async fn restore_session(&self) -> Result<Option<UserProfile>> {
        let Some(token) = self.store.read().await? else {
            debug!("no persisted token, starting unauthenticated");
            return Ok(None);
        };

        // Re-commit the token before the profile lookup; repairs a store
        // whose previous write did not fully propagate.
        self.store.write(&token).await?;
        let user = self.identity.fetch_profile().await?;
        debug!("restored session for {}", user.name);
        Ok(Some(user))
    }

    /// Verify credentials, persist the issued token, and establish the
    /// session.
    ///
    /// Any failure tears the session down (token cleared, state reset,
    /// navigation fired) and surfaces as the single normalized
    /// [`Error::InvalidCredentials`]; the underlying cause is only
    /// logged. Empty arguments are rejected before any collaborator is
    /// touched.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<()> {
        if identifier.is_empty() || secret.is_empty() {
            warn!("login rejected: empty identifier or secret");
            return Err(Error::InvalidCredentials);
        }

        match self.try_login(identifier, secret).await {
            Ok(user) => {
                debug!("login succeeded for {}", user.name);
                self.apply(SessionAction::Login { user });
                Ok(())
            }
            Err(err) => {
                warn!("login failed, tearing session down: {}", err);
                self.logout().await;
                Err(Error::InvalidCredentials)
            }
        }
    }

    async fn try_login(&self, identifier: &str, secret: &str) -> Result<UserProfile> {
        let token = self.identity.verify_credentials(identifier, secret).await?;
        // The token must be durable before the profile fetch: the fetch
        // authenticates with whatever the store currently holds.
        self.store.write(&token).await?;
        let user = self.identity.fetch_profile().await?;
        Ok(user)
    }

    /// Create an account, persist the issued token, and establish the
    /// session.
    ///
    /// Unlike [`login`](Self::login), a failure performs no cleanup and
    /// propagates verbatim: registering from an authenticated context
    /// must not implicitly end that session.
    pub async fn register(&self, payload: &serde_json::Value) -> Result<()> {
        let token = self.identity.create_account(payload).await?;
        self.store.write(&token).await?;
        let user = self.identity.fetch_profile().await?;
        debug!("registration succeeded for {}", user.name);
        self.apply(SessionAction::Register { user });
        Ok(())
    }

    /// Tear the session down: clear the persisted token, reset the
    /// state, and direct the application to its sign-in entry point.
    ///
    /// Infallible. A store failure while clearing is logged and
    /// swallowed; the state reset and navigation still happen.
    pub async fn logout(&self) {
        if let Err(err) = self.store.clear().await {
            warn!("failed to clear persisted token during logout: {}", err);
        }
        self.apply(SessionAction::Logout);
        self.navigator.go_to_sign_in();
    }
}
