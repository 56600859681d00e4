//! Client-facing error taxonomy for REST and session operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a page can observe is one `ApiError`. Validation failures
//! carry per-field messages for inline rendering; everything else renders as
//! a single message block near the action that triggered it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Field name → first human-readable message for that field.
pub type FieldErrors = BTreeMap<String, String>;

/// Failure surfaced by auth and blog operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Client- or server-side field validation rejected the input.
    #[error("{message}")]
    ValidationFailed { message: String, fields: FieldErrors },
    /// Login rejected the email/password pair.
    #[error("{0}")]
    InvalidCredentials(String),
    /// An authenticated call was rejected; the session is no longer usable.
    #[error("{0}")]
    Unauthorized(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The caller is not allowed to mutate the resource.
    #[error("{0}")]
    Forbidden(String),
    /// Transport failure, 5xx, or any response we could not interpret.
    #[error("{0}")]
    NetworkOrServerError(String),
}

impl ApiError {
    /// Build a validation error from collected field messages.
    ///
    /// The summary message is the first field message in field-name order.
    pub fn validation(fields: FieldErrors) -> Self {
        let message = fields
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "Validation error".to_owned());
        Self::ValidationFailed { message, fields }
    }

    /// Validation failure with a summary message and no field detail.
    pub fn validation_message(message: &str) -> Self {
        Self::ValidationFailed { message: message.to_owned(), fields: FieldErrors::new() }
    }

    /// Message for a single field, if this is a validation failure naming it.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::ValidationFailed { fields, .. } => fields.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Split into inline field messages and a banner message.
    ///
    /// Field-level validation failures render inline only; everything else
    /// is a banner.
    pub fn form_feedback(&self) -> (FieldErrors, Option<String>) {
        match self {
            Self::ValidationFailed { fields, .. } if !fields.is_empty() => (fields.clone(), None),
            other => (FieldErrors::new(), Some(other.to_string())),
        }
    }

    /// Whether this error means the stored session must be discarded.
    pub fn clears_session(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
