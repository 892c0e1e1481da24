//! # tagpage Core
//!
//! Host-agnostic state for the tag editor and pagination widgets.
//! Nothing in this crate touches the DOM: hosts feed user events in
//! and read derived views back out.
pub mod constants;
pub mod error;
pub mod pagination;
pub mod tags;

// Re-exports
pub use error::{Error, Result};
pub use pagination::{PageControl, PageItem, PageWindow, Paginator, PaginatorConfig, RenderState};
pub use tags::{Mode, Pane, TagEditor, TagEditorConfig, TagEditorView};
