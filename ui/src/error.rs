//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0:?}")]
    JsValueError(JsValue),

    /// A `NodeRef` is not attached to the expected element.
    #[error("node is not mounted")]
    NodeNotMounted,
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Error::JsValueError(err)
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
