//! # tagpage UI
//!
//! Yew components for the tag editor and the pagination strip.
//! Each component is driven by a reducer over the state machines of
//! [`tagpage_core`], and may be controlled by the host through the
//! reducer handle returned by its hook.
pub mod components;
pub mod error;
pub mod types;
pub mod widgets;

// Re-exports
pub use error::{Error, Result};
