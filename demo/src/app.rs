//! Demo page.
use crate::config::DemoConfig;
use serde_json::Value as JsValue;
use tagpage_core::tags::Pane;
use tagpage_ui::components::Message;
use tagpage_ui::types::Message as MessageData;
use tagpage_ui::widgets::{
    use_paginator, use_tag_editor, Pagination, PaginatorAction, TagEditorAction, TagsEditor,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: DemoConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let tags_state = use_tag_editor(props.config.tags.clone());
    let paginator_state = use_paginator(props.config.pagination.clone());
    let last_change = use_state(|| None::<usize>);

    {
        let tags_state = tags_state.clone();
        let tags_initial = props.config.tags_initial.clone();

        use_effect_with((), move |_| {
            if !tags_initial.is_null() {
                tags_state.dispatch(TagEditorAction::SetTagsValue(tags_initial));
            }
        });
    }

    let on_tags_change = Callback::from(|tags: Vec<String>| {
        tracing::info!(?tags, "tags changed");
    });

    let on_page_change = {
        let last_change = last_change.clone();

        Callback::from(move |page: usize| {
            tracing::info!(page, "page changed");
            last_change.set(Some(page));
        })
    };

    let tags_action = |action: TagEditorAction| {
        let tags_state = tags_state.clone();

        Callback::from(move |_: MouseEvent| {
            tags_state.dispatch(action.clone());
        })
    };

    let toggle_enabled = {
        let tags_state = tags_state.clone();

        Callback::from(move |_: MouseEvent| {
            if tags_state.is_enabled() {
                tags_state.dispatch(TagEditorAction::Disable);
            } else {
                tags_state.dispatch(TagEditorAction::Enable);
            }
        })
    };

    let paginator_action = |action: PaginatorAction| {
        let paginator_state = paginator_state.clone();

        Callback::from(move |_: MouseEvent| {
            paginator_state.dispatch(action.clone());
        })
    };

    let onchange_page_number = {
        let paginator_state = paginator_state.clone();

        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<web_sys::HtmlInputElement>();
            match serde_json::from_str::<JsValue>(&input.value()) {
                Ok(page_count) => {
                    paginator_state.dispatch(PaginatorAction::ChangePageNumberValue(page_count))
                }
                Err(err) => tracing::warn!(?err, "invalid page number"),
            }
        })
    };

    let status = MessageData::info(format!(
        "tags: [{}], page {} of {}{}",
        tags_state.tags().join(", "),
        paginator_state.current_page(),
        paginator_state.page_count(),
        (*last_change)
            .map(|page| format!(", last changed to {page}"))
            .unwrap_or_default(),
    ));

    html! {
        <main>
            <section>
                <TagsEditor state={tags_state.clone()} onchange={on_tags_change} />

                <div class={classes!("controls")}>
                    <button onclick={tags_action(TagEditorAction::Clear)}>{ "Clear" }</button>
                    <button onclick={toggle_enabled}>{
                        if tags_state.is_enabled() { "Disable" } else { "Enable" }
                    }</button>
                    <button onclick={tags_action(TagEditorAction::ShowOnly(Pane::Input))}>{ "Show input" }</button>
                    <button onclick={tags_action(TagEditorAction::ShowOnly(Pane::Chips))}>{ "Show tags" }</button>
                </div>
            </section>

            <section>
                <Pagination state={paginator_state.clone()} onchange={on_page_change} />

                <div class={classes!("controls")}>
                    <button onclick={paginator_action(PaginatorAction::ChangePageNumber(5))}>{ "5 pages" }</button>
                    <button onclick={paginator_action(PaginatorAction::ChangePageNumber(50))}>{ "50 pages" }</button>
                    <button onclick={paginator_action(PaginatorAction::ResetToFirstPage)}>{ "Reset" }</button>
                    <button onclick={paginator_action(PaginatorAction::ForceRerender)}>{ "Repaint" }</button>
                    <label>
                        { "Pages " }
                        <input type="text" placeholder="20" onchange={onchange_page_number} />
                    </label>
                </div>
            </section>

            <Message message={status} />
        </main>
    }
}
