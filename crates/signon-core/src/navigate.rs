//! Post-logout navigation seam.

/// Directs the surrounding application to its sign-in entry point.
///
/// Fired exactly once per completed logout, including the forced logout
/// after a failed sign-in. Fire-and-forget: implementations cannot fail
/// and must not block.
pub trait Navigator: Send + Sync {
    fn go_to_sign_in(&self);
}

/// Navigator that does nothing, for embedders that route on observed
/// state changes instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn go_to_sign_in(&self) {}
}
