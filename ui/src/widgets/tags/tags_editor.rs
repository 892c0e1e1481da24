//! Editable list of tags.
use super::state::{use_tag_editor, TagEditorAction, TagEditorReducer};
use crate::components::Message;
use crate::types::Message as MessageData;
use crate::{Error, Result};
use tagpage_core::constants::{HIDDEN_CLASS, TAGS_DISABLED_CLASS};
use tagpage_core::tags::TagEditorConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagsEditorProps {
    #[prop_or_default]
    pub class: Classes,

    /// Configuration used if `state` is not provided.
    #[prop_or_default]
    pub config: TagEditorConfig,

    /// State created by [`use_tag_editor`].
    /// Provide to control the editor from the host.
    ///
    /// # Notes
    /// + Hooks can not be called conditionally, so the component always creates
    /// its own state from `config`. It is unused while `state` is provided.
    #[prop_or_default]
    pub state: Option<TagEditorReducer>,

    #[prop_or_default]
    pub placeholder: Option<AttrValue>,

    /// Callback when the tags are changed by the user.
    #[prop_or_default]
    pub onchange: Option<Callback<Vec<String>>>,
}

/// Tags are displayed as chips.
/// Clicking the editor switches to a text input holding all tags,
/// which are parsed back into chips when the input loses focus.
/// Clicking a chip removes it.
#[function_component(TagsEditor)]
pub fn tags_editor(props: &TagsEditorProps) -> Html {
    let own_state = use_tag_editor(props.config.clone());
    let state = props.state.clone().unwrap_or(own_state);
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();

        use_effect_with(state.focus_requests(), move |requests| {
            if *requests > 0 {
                if let Err(err) = focus_node(&input_ref) {
                    tracing::error!(?err, "could not focus input");
                }
            }
        });
    }

    let onclick_container = {
        let state = state.clone();

        Callback::from(move |_: MouseEvent| {
            state.dispatch(TagEditorAction::ClickContainer);
        })
    };

    let onfocus = {
        let state = state.clone();

        Callback::from(move |_: FocusEvent| {
            state.dispatch(TagEditorAction::Focus);
        })
    };

    let oninput = {
        let state = state.clone();

        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<web_sys::HtmlTextAreaElement>();
            state.dispatch(TagEditorAction::Input(input.value()));
        })
    };

    let onblur = {
        let state = state.clone();
        let onchange = props.onchange.clone();

        Callback::from(move |_: FocusEvent| {
            let mut next = (**state).clone();
            let committed = next.blur().is_ok() && next.tags() != state.tags();

            state.dispatch(TagEditorAction::Blur);
            if committed {
                if let Some(onchange) = onchange.as_ref() {
                    onchange.emit(next.tags().to_vec());
                }
            }
        })
    };

    let onkeyup = {
        let input_ref = input_ref.clone();

        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }

            if let Err(err) = blur_node(&input_ref) {
                tracing::error!(?err, "could not blur input");
            }
        })
    };

    let onclick_tag = {
        let state = state.clone();
        let onchange = props.onchange.clone();

        move |index: usize| -> Callback<MouseEvent> {
            let state = state.clone();
            let onchange = onchange.clone();

            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();

                let mut next = (**state).clone();
                if next.remove_tag(index).is_none() {
                    return;
                }

                state.dispatch(TagEditorAction::RemoveTag(index));
                if let Some(onchange) = onchange.as_ref() {
                    onchange.emit(next.tags().to_vec());
                }
            })
        }
    };

    let view = state.view();
    let enabled = !view.disabled;
    let list_class = classes!((!view.list_visible).then_some(HIDDEN_CLASS));
    let input_class = classes!((!view.input_visible).then_some(HIDDEN_CLASS));
    let tag_class = classes!("tag", view.disabled.then_some(TAGS_DISABLED_CLASS));

    html! {
        <div class={classes!("tagpage-ui-tags-editor", props.class.clone())}
            onclick={enabled.then_some(onclick_container)}>

            <ul class={list_class}>
                { state
                    .tags()
                    .iter()
                    .enumerate()
                    .map(|(index, tag)| html! {
                        <li key={index}
                            class={tag_class.clone()}
                            onclick={enabled.then(|| onclick_tag(index))}>

                            { tag }
                        </li>
                    })
                    .collect::<Html>()
                }
            </ul>

            <textarea ref={input_ref}
                class={input_class}
                placeholder={props.placeholder.clone()}
                value={state.raw_text().to_string()}
                readonly={view.disabled}
                onfocus={enabled.then_some(onfocus)}
                oninput={enabled.then_some(oninput)}
                onblur={enabled.then_some(onblur)}
                onkeyup={enabled.then_some(onkeyup)} />

            if let Some(error) = view.error {
                <Message class={classes!("tags-error-tip")}
                    message={MessageData::error(error)} />
            }
        </div>
    }
}

// ***************
// *** helpers ***
// ***************

fn focus_node(node: &NodeRef) -> Result {
    let elm = node
        .cast::<web_sys::HtmlElement>()
        .ok_or(Error::NodeNotMounted)?;

    elm.focus()?;
    Ok(())
}

fn blur_node(node: &NodeRef) -> Result {
    let elm = node
        .cast::<web_sys::HtmlElement>()
        .ok_or(Error::NodeNotMounted)?;

    elm.blur()?;
    Ok(())
}
