//! Auth controller: the only writer of the session.
//!
//! ARCHITECTURE
//! ============
//! Views never touch the `TokenStore` directly. They call `login`, `signup`,
//! `logout`, `restore`, and `reject` here and read back through `view`.
//! Every method takes `&self`: the store swaps the session atomically, so a
//! handle can be cloned into `spawn_local` tasks without holding a borrow
//! across an await point.
//!
//! TRADE-OFFS
//! ==========
//! Expiry is checked explicitly (`ensure_valid`) at load, before each
//! authenticated call, and at route evaluation, rather than inside the
//! selector. Reads stay side-effect free at the cost of callers having to
//! remember the check; `bearer` bundles it for request code.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::types::User;
use crate::session::selector::SessionView;
use crate::session::store::{Session, TokenStorage, TokenStore};
use crate::session::token;
use crate::util::validation::{LoginForm, SignupForm, validate_login, validate_signup};

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Clone, Debug)]
pub struct AuthController<A, S> {
    api: A,
    store: TokenStore<S>,
}

impl<A: AuthApi, S: TokenStorage> AuthController<A, S> {
    pub fn new(api: A, store: TokenStore<S>) -> Self {
        Self { api, store }
    }

    /// The API collaborator, for non-auth calls made on behalf of this session.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Raw session snapshot.
    pub fn session(&self) -> Session {
        self.store.get()
    }

    /// Derived session view at the current time. Never mutates.
    pub fn view(&self) -> SessionView {
        SessionView::of(&self.store.get(), token::now_unix())
    }

    /// Clear the session if its token is expired or malformed.
    ///
    /// Returns whether a live token remains.
    pub fn ensure_valid(&self) -> bool {
        self.ensure_valid_at(token::now_unix())
    }

    pub fn ensure_valid_at(&self, now: i64) -> bool {
        let session = self.store.get();
        let Some(current) = session.token() else {
            return false;
        };
        if token::is_expired_at(current, now) {
            leptos::logging::log!("session token expired; clearing session");
            self.store.clear();
            return false;
        }
        true
    }

    /// Token for an authenticated request, after the expiry check.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` if there is no live session.
    pub fn bearer(&self) -> Result<String, ApiError> {
        if !self.ensure_valid() {
            return Err(ApiError::Unauthorized(SESSION_EXPIRED.to_owned()));
        }
        self.store
            .get()
            .token()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Unauthorized(SESSION_EXPIRED.to_owned()))
    }

    /// Drop the session if `err` says the server no longer accepts it.
    pub fn reject(&self, err: &ApiError) {
        if err.clears_session() {
            leptos::logging::log!("authenticated request rejected; clearing session");
            self.store.clear();
        }
    }

    /// Validate credentials, authenticate, and establish the session.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` before any request when the form is invalid;
    /// otherwise whatever the API returned. The session is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let form = LoginForm { email: email.to_owned(), password: password.to_owned() };
        let req = validate_login(&form)?;
        let resp = self.api.login(&req).await?;
        if token::is_expired(&resp.token) {
            leptos::logging::warn!("login returned an expired or unreadable token");
            return Err(ApiError::NetworkOrServerError("Login failed. Please try again.".to_owned()));
        }
        leptos::logging::log!("logged in as user {}", resp.user.id);
        self.store.set(Session::Active { token: resp.token, user: resp.user.clone() });
        Ok(resp.user)
    }

    /// Validate and create an account. Does not establish a session.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` before any request when the form is invalid;
    /// otherwise whatever the API returned.
    pub async fn signup(&self, form: &SignupForm) -> Result<User, ApiError> {
        let req = validate_signup(form)?;
        let user = self.api.signup(&req).await?;
        leptos::logging::log!("created account for user {}", user.id);
        Ok(user)
    }

    /// Clear the session. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        leptos::logging::log!("logged out");
    }

    /// Resume a session persisted by an earlier visit.
    ///
    /// Expired tokens are discarded without contacting the server. A live
    /// token moves the session to `Restoring` until `/profile` answers; any
    /// profile failure clears it. A login that lands while the profile call
    /// is in flight wins.
    pub async fn restore(&self) -> SessionView {
        let Some(persisted) = self.store.persisted() else {
            return SessionView::anonymous();
        };
        if token::is_expired(&persisted) {
            leptos::logging::log!("discarding expired persisted token");
            self.store.clear();
            return SessionView::anonymous();
        }
        self.store.set(Session::Restoring { token: persisted.clone() });
        let outcome = self.api.profile(&persisted).await;
        if self.store.get().token() != Some(persisted.as_str()) {
            return self.view();
        }
        match outcome {
            Ok(user) => {
                leptos::logging::log!("restored session for user {}", user.id);
                self.store.set(Session::Active { token: persisted, user });
            }
            Err(err) => {
                leptos::logging::warn!("session restore failed: {err}");
                self.store.clear();
            }
        }
        self.view()
    }
}
