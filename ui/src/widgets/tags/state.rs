//! Tag editor state.
use serde_json::Value as JsValue;
use std::ops::Deref;
use std::rc::Rc;
use tagpage_core::tags::{Pane, TagEditor, TagEditorConfig};
use yew::prelude::*;

/// Actions available to modify the [`TagEditorState`].
#[derive(Clone, Debug)]
pub enum TagEditorAction {
    /// Remove all tags and clear the input.
    Clear,

    /// Resume reacting to the user.
    Enable,

    /// Stop reacting to the user.
    Disable,

    /// Replace all tags.
    SetTags(Vec<String>),

    /// Replace all tags from a host supplied value.
    /// Ignored if the value is not an array.
    SetTagsValue(JsValue),

    /// Force which element is visible.
    ShowOnly(Pane),

    // --- user events ---
    ClickContainer,
    Focus,
    Input(String),
    Blur,
    RemoveTag(usize),
}

#[derive(PartialEq, Clone, Debug)]
pub struct TagEditorState(TagEditor);

impl From<TagEditor> for TagEditorState {
    fn from(editor: TagEditor) -> Self {
        Self(editor)
    }
}

impl Deref for TagEditorState {
    type Target = TagEditor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for TagEditorState {
    type Action = TagEditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = self.0.clone();
        match action {
            TagEditorAction::Clear => current.clear(),
            TagEditorAction::Enable => current.enable(),
            TagEditorAction::Disable => current.disable(),
            TagEditorAction::SetTags(tags) => current.set_tags(tags),
            TagEditorAction::SetTagsValue(value) => current.set_tags_value(&value),
            TagEditorAction::ShowOnly(pane) => current.show_only(pane),
            TagEditorAction::ClickContainer => {
                current.click_container();
            }
            TagEditorAction::Focus => current.focus(),
            TagEditorAction::Input(text) => current.set_raw_text(text),
            TagEditorAction::Blur => {
                // rejection is displayed from state
                let _ = current.blur();
            }
            TagEditorAction::RemoveTag(index) => {
                current.remove_tag(index);
            }
        }

        Self(current).into()
    }
}

pub type TagEditorReducer = UseReducerHandle<TagEditorState>;

/// Creates the state for a [`TagsEditor`](super::TagsEditor).
/// The returned handle lets the host read and modify the tags.
#[hook]
pub fn use_tag_editor(config: TagEditorConfig) -> TagEditorReducer {
    use_reducer(move || TagEditorState::from(TagEditor::new(config)))
}

#[cfg(test)]
#[path = "./state_test.rs"]
mod state_test;
