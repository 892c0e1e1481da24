//! Page number strip.
use super::renderer::default_renderer;
use super::state::{use_paginator, PaginatorAction, PaginatorReducer};
use tagpage_core::pagination::{PageControl, PaginatorConfig, RenderState};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    #[prop_or_default]
    pub class: Classes,

    /// Configuration used if `state` is not provided.
    #[prop_or_default]
    pub config: PaginatorConfig,

    /// State created by [`use_paginator`].
    /// Provide to control the paginator from the host.
    ///
    /// # Notes
    /// + Hooks can not be called conditionally, so the component always creates
    /// its own state from `config`. It is unused while `state` is provided.
    #[prop_or_default]
    pub state: Option<PaginatorReducer>,

    /// Replaces the default markup.
    /// Returning `None` renders nothing.
    ///
    /// # Notes
    /// + Clicks are interpreted from the classes and text of the clicked `li`,
    /// so custom markup must keep the classes of [`default_renderer`].
    #[prop_or_default]
    pub renderer: Option<Callback<RenderState, Option<Html>>>,

    /// Callback when the user changes the page.
    /// Receives the new current page.
    pub onchange: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let own_state = use_paginator(props.config.clone());
    let state = props.state.clone().unwrap_or(own_state);

    let onclick = {
        let state = state.clone();
        let onchange = props.onchange.clone();

        Callback::from(move |e: MouseEvent| {
            let Some(control) = clicked_control(&e) else {
                return;
            };

            let mut next = (**state).clone();
            let Some(page) = next.click(control) else {
                return;
            };

            state.dispatch(PaginatorAction::Click(control));
            onchange.emit(page);
        })
    };

    let content = match props.renderer.as_ref() {
        Some(renderer) => state.render_with(|render_state| renderer.emit(*render_state)),
        None => state.render_with(default_renderer),
    };

    html! {
        <div class={classes!("tagpage-ui-pagination", props.class.clone())} {onclick}>
            if let Some(content) = content {
                { content }
            }
        </div>
    }
}

/// # Returns
/// The control of the `li` containing the event target, if it is clickable.
fn clicked_control(e: &MouseEvent) -> Option<PageControl> {
    let target = e.target()?.dyn_into::<web_sys::Element>().ok()?;
    let item = target.closest("li").ok()??;
    let text = item.text_content().unwrap_or_default();
    PageControl::from_element(&item.class_name(), &text)
}
