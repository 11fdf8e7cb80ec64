//! Traversal error types.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that abort a traversal.
///
/// None of these are recovered from inside the walker. Side effects of
/// callbacks that already ran are not rolled back.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// No root node was given.
    #[error("Can't pass nullish data to traverser")]
    MissingInput,

    /// A node outside the JSON model was reached.
    #[error("Type of data not supported in JSON: [{type_name}] at {path}")]
    UnsupportedType {
        /// Runtime type name of the offending node.
        type_name: String,
        /// Path of the offending node, segments joined with `/`.
        path: String,
    },

    /// A callback failed with a caller-defined error.
    #[error("Callback error: {0}")]
    Callback(#[source] Box<dyn StdError + Send + Sync>),
}

impl TraverseError {
    /// Creates an unsupported type error.
    pub fn unsupported(type_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            path: path.into(),
        }
    }

    /// Wraps a caller error raised from inside a callback.
    ///
    /// The original error stays reachable through [`StdError::source`] and
    /// [`TraverseError::callback_error`].
    pub fn callback(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Callback(error.into())
    }

    /// Returns the caller error if this is a [`TraverseError::Callback`]
    /// holding an `E`.
    pub fn callback_error<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Callback(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Result type for traversal operations.
pub type Result<T> = std::result::Result<T, TraverseError>;
