//! Route protection and resource ownership checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route::RequireAuth` runs `evaluate` on every
//! navigation into a protected page. A redirect to login carries the
//! requested path in the `next` query parameter; the login page resumes it
//! through `resume_path` once a session exists.
//!
//! The ownership check here only spares the user a doomed edit form. The
//! server enforces ownership on every mutation regardless.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Blog;
use crate::session::selector::SessionView;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
/// Query parameter carrying the resume path across a login redirect.
pub const RESUME_PARAM: &str = "next";

/// Outcome of one navigation attempt into a protected page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    /// Session restoration is in flight; decide once it settles.
    Pending,
    Redirected { to: String },
}

/// Paths that require an authenticated session.
pub fn is_protected(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path == "/create" || path == "/my-blogs" || path.starts_with("/edit/")
}

/// Rejoin a router pathname and query string into one navigable path.
pub fn target_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Decide whether `target` may render for `view`.
pub fn evaluate(target: &str, view: &SessionView) -> GuardDecision {
    if view.is_authenticated() {
        GuardDecision::Allowed
    } else if view.is_restoring() {
        GuardDecision::Pending
    } else {
        GuardDecision::Redirected { to: login_redirect(target) }
    }
}

/// Login URL that resumes `target` after authentication.
pub fn login_redirect(target: &str) -> String {
    if !is_resumable(target) {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{LOGIN_PATH}?{RESUME_PARAM}={encoded}")
}

/// Where to go after a successful login, given the decoded `next` parameter.
pub fn resume_path(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if is_resumable(path) => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}

/// Local absolute paths only, and never back into the auth pages.
fn is_resumable(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") || path.starts_with("/\\") {
        return false;
    }
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    bare != LOGIN_PATH && bare != SIGNUP_PATH
}

/// Relationship between the session user and a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    Owner,
    NotOwner,
    /// No authenticated user to compare against.
    Unknown,
}

pub fn ownership(view: &SessionView, blog: &Blog) -> Ownership {
    match view.user_id() {
        Some(id) if view.is_authenticated() && id == blog.user_id => Ownership::Owner,
        Some(_) => Ownership::NotOwner,
        None => Ownership::Unknown,
    }
}

/// Whether edit/delete controls should be offered for `blog`.
pub fn can_modify(view: &SessionView, blog: &Blog) -> bool {
    ownership(view, blog) == Ownership::Owner
}
