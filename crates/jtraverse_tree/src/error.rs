//! Conversion error types.

use thiserror::Error;

/// Errors that can occur when converting a [`Node`](crate::Node) to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeConversionError {
    /// The node, or one of its descendants, is not part of the JSON model.
    #[error("Value of type [{type_name}] is not representable in JSON")]
    NotJson {
        /// Runtime type name of the offending value.
        type_name: String,
    },
}

impl NodeConversionError {
    /// Creates a new not-JSON error.
    pub fn not_json(type_name: impl Into<String>) -> Self {
        Self::NotJson {
            type_name: type_name.into(),
        }
    }
}
