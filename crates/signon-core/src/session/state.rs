//! Session state record and the pure transition function.

use crate::types::UserProfile;

/// In-memory authentication session state.
///
/// `authenticated` and `user` move together: a state is authenticated
/// exactly when it carries a profile. `initialized` flips to true when
/// the startup check completes and never resets afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the startup session check has completed.
    pub initialized: bool,
    /// Whether a user is currently signed in.
    pub authenticated: bool,
    /// Profile of the signed-in user, if any.
    pub user: Option<UserProfile>,
}

/// The four session transitions, applied by [`reduce`].
///
/// The enum is closed and matched exhaustively, so an unrecognized
/// transition cannot exist.
#[derive(Debug, Clone)]
pub(crate) enum SessionAction {
    /// Startup check completed. `user` carries the restored profile when
    /// a persisted token resolved successfully.
    Initialize { user: Option<UserProfile> },
    /// Credential verification and profile fetch completed.
    Login { user: UserProfile },
    /// Account creation and profile fetch completed.
    Register { user: UserProfile },
    /// Session torn down.
    Logout,
}

/// Apply one transition to the current state, producing the next state.
///
/// Pure state-to-state mapping with no I/O, so an async flow can apply
/// its final transition atomically after its awaits are done.
pub(crate) fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::Initialize { user } => SessionState {
            initialized: true,
            authenticated: user.is_some(),
            user,
        },
        SessionAction::Login { user } | SessionAction::Register { user } => SessionState {
            initialized: state.initialized,
            authenticated: true,
            user: Some(user),
        },
        SessionAction::Logout => SessionState {
            initialized: state.initialized,
            authenticated: false,
            user: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: i64, name: &str) -> UserProfile {
        UserProfile {
            id,
            name: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn test_default_state_is_uninitialized() {
        let state = SessionState::default();
        assert!(!state.initialized);
        assert!(!state.authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_initialize_without_user_only_marks_initialized() {
        let next = reduce(&SessionState::default(), SessionAction::Initialize { user: None });
        assert!(next.initialized);
        assert!(!next.authenticated);
        assert!(next.user.is_none());
    }

    #[test]
    fn test_initialize_with_user_restores_session() {
        let next = reduce(
            &SessionState::default(),
            SessionAction::Initialize {
                user: Some(profile(42, "Ana")),
            },
        );
        assert!(next.initialized);
        assert!(next.authenticated);
        assert_eq!(next.user, Some(profile(42, "Ana")));
    }

    #[test]
    fn test_login_preserves_initialized_flag() {
        for initialized in [false, true] {
            let state = SessionState {
                initialized,
                ..SessionState::default()
            };
            let next = reduce(
                &state,
                SessionAction::Login {
                    user: profile(7, "Bo"),
                },
            );
            assert_eq!(next.initialized, initialized);
            assert!(next.authenticated);
            assert_eq!(next.user, Some(profile(7, "Bo")));
        }
    }

    #[test]
    fn test_register_establishes_session() {
        let state = reduce(&SessionState::default(), SessionAction::Initialize { user: None });
        let next = reduce(
            &state,
            SessionAction::Register {
                user: profile(8, "Cy"),
            },
        );
        assert!(next.initialized);
        assert!(next.authenticated);
        assert_eq!(next.user, Some(profile(8, "Cy")));
    }

    #[test]
    fn test_logout_clears_user_and_keeps_initialized() {
        let state = reduce(
            &SessionState::default(),
            SessionAction::Initialize {
                user: Some(profile(42, "Ana")),
            },
        );
        let next = reduce(&state, SessionAction::Logout);
        assert!(next.initialized);
        assert!(!next.authenticated);
        assert!(next.user.is_none());
    }

    #[test]
    fn test_authenticated_always_pairs_with_user() {
        // Walk a representative transition sequence and check the
        // pairing after every step.
        let actions = vec![
            SessionAction::Initialize { user: None },
            SessionAction::Login {
                user: profile(1, "Ana"),
            },
            SessionAction::Logout,
            SessionAction::Register {
                user: profile(2, "Bo"),
            },
            SessionAction::Initialize {
                user: Some(profile(3, "Cy")),
            },
            SessionAction::Logout,
            SessionAction::Logout,
        ];

        let mut state = SessionState::default();
        for action in actions {
            state = reduce(&state, action);
            assert_eq!(state.authenticated, state.user.is_some());
        }
    }
}
