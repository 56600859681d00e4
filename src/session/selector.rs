//! Derived, side-effect-free view of the session.
//!
//! An expired token reads as unauthenticated here but is not removed; the
//! controller's `ensure_valid` does the removal at load time, before each
//! authenticated request, and on every protected route evaluation.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::net::types::User;
use crate::session::store::Session;
use crate::session::token;

/// Coarse authentication status used by views and the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    /// A live persisted token is waiting on `/profile`.
    Restoring,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub status: AuthStatus,
    pub current_user: Option<User>,
}

impl SessionView {
    /// Compute the view of `session` at `now` (seconds since epoch).
    pub fn of(session: &Session, now: i64) -> Self {
        let live = session.token().is_some_and(|t| !token::is_expired_at(t, now));
        match session {
            Session::Active { user, .. } if live => {
                Self { status: AuthStatus::Authenticated, current_user: Some(user.clone()) }
            }
            Session::Restoring { .. } if live => Self { status: AuthStatus::Restoring, current_user: None },
            _ => Self::anonymous(),
        }
    }

    pub fn anonymous() -> Self {
        Self { status: AuthStatus::Anonymous, current_user: None }
    }

    /// Placeholder while startup restoration is still deciding.
    pub fn restoring() -> Self {
        Self { status: AuthStatus::Restoring, current_user: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    pub fn is_restoring(&self) -> bool {
        self.status == AuthStatus::Restoring
    }

    pub fn user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|u| u.id)
    }
}
