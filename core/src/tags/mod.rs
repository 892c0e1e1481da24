//! Editable tag list.
pub mod config;
pub mod editor;
pub mod tokenize;
pub mod width;

// Re-exports
pub use config::TagEditorConfig;
pub use editor::{Mode, Pane, TagEditor, TagEditorView};
pub use tokenize::{normalize_tags, split_raw, tags_from_value};
pub use width::visual_width;
