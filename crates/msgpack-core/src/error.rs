//! Error types for MessagePack encoding operations.

use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur while building or encoding a [`crate::Value`].
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The value belongs to a format family, but its magnitude or length is
    /// larger than the widest header of that family can describe.
    #[error("{family} out of range: {value}")]
    OutOfRange { family: &'static str, value: String },

    /// The input has a shape no format family accepts (serde bridge only).
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Containers are nested deeper than `EncodeOptions::max_depth`.
    #[error("nesting depth exceeds limit of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },

    /// The input string was not valid JSON (`encode_json` path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl EncodeError {
    pub(crate) fn out_of_range(family: &'static str, value: impl Display) -> Self {
        EncodeError::OutOfRange {
            family,
            value: value.to_string(),
        }
    }
}

impl serde::ser::Error for EncodeError {
    fn custom<T: Display>(msg: T) -> Self {
        EncodeError::Custom(msg.to_string())
    }
}

/// Convenience alias used throughout msgpack-core.
pub type Result<T> = std::result::Result<T, EncodeError>;
