//! Error types for element operations.

use thiserror::Error;

/// Result type for element operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while editing or serializing elements.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field patch named a property no element variant exposes.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// A field patch carried a value the property cannot accept.
    #[error("Invalid value for {property}: {value}")]
    InvalidValue {
        /// The property being patched.
        property: String,
        /// The rejected value.
        value: String,
    },

    /// Element not found in page.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// An operation expected the other element variant.
    #[error("Operation requires a {expected} element")]
    KindMismatch {
        /// The variant the operation applies to.
        expected: &'static str,
    },

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
