//! Encoder configuration.

use serde::{Deserialize, Serialize};

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options accepted by [`crate::encode_with`] and [`crate::to_value_with`].
///
/// Deserializable with every field optional, so a host application can embed
/// it in its own configuration file:
///
/// ```
/// use msgpack_core::EncodeOptions;
///
/// let opts: EncodeOptions = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(opts.max_depth, 16);
/// let defaults: EncodeOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, EncodeOptions::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Maximum container nesting level. A top-level array or map sits at
    /// level 1; `0` permits scalars only.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
