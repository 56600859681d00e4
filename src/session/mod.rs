//! Client authentication session lifecycle.
//!
//! ARCHITECTURE
//! ============
//! Leaf-first: `token` decodes expiry, `store` holds the session and its
//! durable copy, `selector` derives what views may assume, `controller` is
//! the sole writer, and `guard` gates protected routes and owner-only
//! actions.

pub mod controller;
pub mod guard;
pub mod selector;
pub mod store;
pub mod token;
