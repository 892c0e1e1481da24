//! Default page strip markup.
use tagpage_core::constants::PAGE_LIST_CLASS;
use tagpage_core::pagination::{default_layout, RenderState};
use yew::prelude::*;

/// Renders the default page strip as a list of page controls.
///
/// # Returns
/// `None` if there is nothing to render.
pub fn default_renderer(state: &RenderState) -> Option<Html> {
    let items = default_layout(state);
    if items.is_empty() {
        return None;
    }

    Some(html! {
        <ul class={PAGE_LIST_CLASS}>
            { items
                .iter()
                .map(|item| html! {
                    <li class={classes!(item.classes())}>{ item.label() }</li>
                })
                .collect::<Html>()
            }
        </ul>
    })
}
