//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions only: form validation before any request, and display
//! formatting for dates and excerpts.

pub mod format;
pub mod validation;
