//! Route guard for protected screens.

/// Snapshot of the session that the gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    /// An access token is held.
    pub is_authenticated: bool,
    /// The startup user lookup has not finished.
    pub loading: bool,
}

/// What a protected screen should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Authentication is still indeterminate; show a loading indicator.
    Loading,
    /// Definitively unauthenticated; replace the current route with `to`.
    Redirect {
        /// Public entry point.
        to: String,
    },
    /// Render the protected content.
    Allow,
}

impl GateDecision {
    /// Returns `true` if protected content may render.
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Guards protected screens behind an authenticated session.
///
/// ## Example
///
/// ```rust
/// use shopadmin::auth::{AuthGate, AuthState, GateDecision};
///
/// let gate = AuthGate::default();
/// let decision = gate.evaluate(AuthState { is_authenticated: false, loading: false });
/// assert_eq!(decision, GateDecision::Redirect { to: "/".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGate {
    entry_point: String,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AuthGate {
    /// Creates a gate that redirects to `entry_point`.
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
        }
    }

    /// Returns the redirect target.
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Decides what to render. Loading wins over everything else.
    pub fn evaluate(&self, state: AuthState) -> GateDecision {
        if state.loading {
            GateDecision::Loading
        } else if !state.is_authenticated {
            GateDecision::Redirect {
                to: self.entry_point.clone(),
            }
        } else {
            GateDecision::Allow
        }
    }
}
