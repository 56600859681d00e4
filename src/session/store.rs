//! Token store: the single in-memory session plus its durable copy.
//!
//! DESIGN
//! ======
//! The session is one value behind a lock and is swapped as a whole, so a
//! reader sees either the old session or the new one, never a token without
//! its user. Only the token is written to durable storage; the user is
//! re-fetched on reload (see `Session::Restoring`).
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthController` owns the only `TokenStore` in the app. Leptos views learn
//! about changes through the observer callback, which bumps a revision signal.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::net::types::User;

/// Durable side-channel for the bearer token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// `localStorage`-backed token storage. No-op outside the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "hydrate")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::local_storage()?;
            storage.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::local_storage() else {
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                leptos::logging::warn!("token persist failed; session will not survive reload");
            }
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::local_storage() else {
                return;
            };
            if storage.remove_item(&self.key).is_err() {
                leptos::logging::warn!("token removal from storage failed");
            }
        }
    }
}

/// Process-local token storage. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with `token`, as if left behind by a previous visit.
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.save(token);
        storage
    }

    /// Current durable content, for inspection.
    pub fn peek(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.peek()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// The authentication session.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No token.
    #[default]
    Anonymous,
    /// A persisted token was found; the user is being fetched.
    Restoring { token: String },
    /// Token and user are both known.
    Active { token: String, user: User },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Restoring { token } | Self::Active { token, .. } => Some(token),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Active { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, Self::Restoring { .. })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Restoring { .. } => f.debug_struct("Restoring").field("token", &"<redacted>").finish(),
            Self::Active { user, .. } => f
                .debug_struct("Active")
                .field("token", &"<redacted>")
                .field("user", &user.id)
                .finish(),
        }
    }
}

type Observer = Arc<dyn Fn() + Send + Sync>;

/// In-memory session with write-through token persistence.
pub struct TokenStore<S> {
    session: Arc<RwLock<Session>>,
    storage: S,
    observer: Option<Observer>,
}

impl<S: TokenStorage> TokenStore<S> {
    /// An empty store over `storage`. Nothing is loaded until `persisted` is read.
    pub fn new(storage: S) -> Self {
        Self { session: Arc::new(RwLock::new(Session::Anonymous)), storage, observer: None }
    }

    /// Invoke `observer` after every session change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn() + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Current session snapshot.
    pub fn get(&self) -> Session {
        self.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the session and write its token through to durable storage.
    pub fn set(&self, session: Session) {
        match session.token() {
            Some(token) => self.storage.save(token),
            None => self.storage.remove(),
        }
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
        self.notify();
    }

    /// Drop the session from memory and durable storage.
    pub fn clear(&self) {
        self.set(Session::Anonymous);
    }

    /// Token left in durable storage by an earlier visit.
    pub fn persisted(&self) -> Option<String> {
        self.storage.load()
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer();
        }
    }
}

impl<S: Clone> Clone for TokenStore<S> {
    fn clone(&self) -> Self {
        Self { session: Arc::clone(&self.session), storage: self.storage.clone(), observer: self.observer.clone() }
    }
}

impl<S> fmt::Debug for TokenStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("TokenStore")
            .field("has_token", &session.token().is_some())
            .field("user", &session.user().map(|u| u.id))
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
