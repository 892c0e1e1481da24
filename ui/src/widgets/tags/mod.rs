//! Tag widgets.
pub mod state;
pub mod tags_editor;

// Re-exports
pub use state::{use_tag_editor, TagEditorAction, TagEditorReducer, TagEditorState};
pub use tags_editor::TagsEditor;
