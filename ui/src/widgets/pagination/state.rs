//! Paginator state.
use serde_json::Value as JsValue;
use std::ops::Deref;
use std::rc::Rc;
use tagpage_core::pagination::{PageControl, Paginator, PaginatorConfig};
use yew::prelude::*;

/// Actions available to modify the [`PaginatorState`].
#[derive(Clone, Debug)]
pub enum PaginatorAction {
    /// Set the total number of pages, returning to the first page.
    ChangePageNumber(usize),

    /// Set the total number of pages from a host supplied value.
    /// Ignored if the value is not a non-negative integer.
    ChangePageNumberValue(JsValue),

    /// Return to the first page.
    /// Not displayed until the next render.
    ResetToFirstPage,

    /// Render the current state.
    ForceRerender,

    /// A page control was clicked.
    Click(PageControl),
}

#[derive(PartialEq, Clone, Debug)]
pub struct PaginatorState(Paginator);

impl From<Paginator> for PaginatorState {
    fn from(paginator: Paginator) -> Self {
        Self(paginator)
    }
}

impl Deref for PaginatorState {
    type Target = Paginator;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for PaginatorState {
    type Action = PaginatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = self.0.clone();
        match action {
            PaginatorAction::ChangePageNumber(page_count) => current.change_page_number(page_count),
            PaginatorAction::ChangePageNumberValue(page_count) => {
                current.change_page_number_value(&page_count)
            }
            PaginatorAction::ResetToFirstPage => current.reset_to_first_page(),
            PaginatorAction::ForceRerender => current.force_rerender(),
            PaginatorAction::Click(control) => {
                current.click(control);
            }
        }

        Self(current).into()
    }
}

pub type PaginatorReducer = UseReducerHandle<PaginatorState>;

/// Creates the state for a [`Pagination`](super::Pagination).
/// The returned handle lets the host read the current page and
/// change the number of pages.
#[hook]
pub fn use_paginator(config: PaginatorConfig) -> PaginatorReducer {
    use_reducer(move || PaginatorState::from(Paginator::new(config)))
}

#[cfg(test)]
#[path = "./state_test.rs"]
mod state_test;
