//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards on the login and dashboard pages. The state starts
//! unresolved so server rendering never redirects; the browser resolves it
//! from the session cookie after hydration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session token presence and whether the cookie has been consulted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub resolved: bool,
}

impl SessionState {
    /// Resolved state built from an optional cookie value.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), resolved: true }
    }

    /// No token means unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
