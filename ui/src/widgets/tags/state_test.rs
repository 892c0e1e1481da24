use super::*;
use serde_json::json;
use tagpage_core::tags::Mode;

#[test]
fn reduce_should_commit_on_blur() {
    let state = Rc::new(TagEditorState::from(TagEditor::default()));
    let state = state.reduce(TagEditorAction::SetTags(vec!["a".into()]));
    let state = state.reduce(TagEditorAction::Focus);
    assert_eq!("a", state.raw_text());

    let state = state.reduce(TagEditorAction::Input("a b，c".into()));
    let state = state.reduce(TagEditorAction::Blur);
    assert_eq!(Mode::Viewing, state.mode());
    assert_eq!(vec!["a", "b", "c"], state.tags());
}

#[test]
fn reduce_should_keep_editing_on_rejected_blur() {
    let state = Rc::new(TagEditorState::from(TagEditor::new(TagEditorConfig::new(2))));
    let state = state.reduce(TagEditorAction::Focus);
    let state = state.reduce(TagEditorAction::Input("abc".into()));
    let state = state.reduce(TagEditorAction::Blur);
    assert_eq!(Mode::Editing, state.mode());
    assert!(state.tags().is_empty());
    assert!(state.view().error.is_some());
}

#[test]
fn reduce_should_ignore_user_events_when_disabled() {
    let state = Rc::new(TagEditorState::from(TagEditor::default()));
    let state = state.reduce(TagEditorAction::SetTags(vec!["a".into(), "b".into()]));
    let state = state.reduce(TagEditorAction::Disable);
    let state = state.reduce(TagEditorAction::RemoveTag(0));
    let state = state.reduce(TagEditorAction::ClickContainer);
    assert_eq!(vec!["a", "b"], state.tags());
    assert_eq!(0, state.focus_requests());

    let state = state.reduce(TagEditorAction::Enable);
    let state = state.reduce(TagEditorAction::RemoveTag(0));
    assert_eq!(vec!["b"], state.tags());

    let state = state.reduce(TagEditorAction::Clear);
    assert!(state.tags().is_empty());
}

#[test]
fn set_tags_value_should_ignore_non_arrays() {
    let state = Rc::new(TagEditorState::from(TagEditor::default()));
    let state = state.reduce(TagEditorAction::SetTagsValue(json!(["rust", "yew"])));
    assert_eq!(vec!["rust", "yew"], state.tags());

    let state = state.reduce(TagEditorAction::SetTagsValue(json!("rust,yew,wasm")));
    let state = state.reduce(TagEditorAction::SetTagsValue(json!(null)));
    assert_eq!(vec!["rust", "yew"], state.tags());
}
