//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of the session store's identity. The store remains the
//! owner; this copy is refreshed after login, register and logout so views
//! re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use peerpoint::session::Session;

/// Identity snapshot rendered by the header and ownership checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Name shown in the header, if signed in.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(Session::name)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(Session::user_id)
    }
}
