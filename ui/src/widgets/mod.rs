//! UI Widgets
pub mod pagination;
pub mod tags;

// Re-exports
pub use pagination::{use_paginator, Pagination, PaginatorAction, PaginatorReducer};
pub use tags::{use_tag_editor, TagEditorAction, TagEditorReducer, TagsEditor};
