//! Page-scoped client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one `RwSignal` of a state struct from here. The structs
//! are plain data with `begin`/`apply` transitions so the request lifecycle
//! (loading, error, stale-response suppression) is testable without a
//! reactive runtime. Async flows that call the API take the auth controller
//! so authenticated requests share one expiry check and one 401 path.

pub mod blogs;
pub mod editor;
