//! Tag editor configuration.
use crate::constants::{DEFAULT_TAG_MAX_LENGTH, TAG_TOO_LONG_MESSAGE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`TagEditor`](super::TagEditor).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TagEditorConfig {
    /// Maximum width of a single tag, in visual width units.
    pub max_length: usize,

    /// Message displayed when a tag is too long.
    pub error_message: String,
}

impl TagEditorConfig {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }
}

impl Default for TagEditorConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_TAG_MAX_LENGTH,
            error_message: TAG_TOO_LONG_MESSAGE.to_string(),
        }
    }
}
