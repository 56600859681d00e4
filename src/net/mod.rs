//! Networking modules for the REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and failure classification, `latest` suppresses
//! out-of-order responses, and `types` defines the wire schema.

pub mod api;
pub mod latest;
pub mod types;
