//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the welcome route guard to decide between rendering the greeting
//! and redirecting to login. Mirrors what `state::session` has in storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Authentication state tracking the restored session and loading status.
///
/// `loading` stays true until a page has read the persisted session, so
/// guards never redirect on the initial empty state.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after the persisted session has been read.
    pub fn restored(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(Session::name)
    }
}
