//! Common error types.
use std::result::Result as StdResult;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// *****************
// *** Tag Error ***
// *****************

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum TagError {
    /// A tag is wider than the configured maximum.
    #[error("tag `{tag}` is {width} units wide, maximum is {max_length}")]
    TooLong {
        tag: String,
        width: usize,
        max_length: usize,
    },
}

impl TagError {
    pub fn too_long(tag: impl Into<String>, width: usize, max_length: usize) -> Self {
        Self::TooLong {
            tag: tag.into(),
            width,
            max_length,
        }
    }
}

// *********************
// *** tagpage Error ***
// *********************

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("{0}")]
    Tag(TagError),

    /// Invalid value encountered.
    #[error("{0}")]
    Value(String),
}

impl Error {
    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }
}

impl From<TagError> for Error {
    fn from(err: TagError) -> Self {
        Self::Tag(err)
    }
}

// **********************
// *** tagpage Result ***
// **********************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
