//! Paginator state.
use super::layout::{default_layout, PageControl, PageItem};
use super::window::{calculate_window, PageWindow};
use super::PaginatorConfig;
use crate::constants::{DEFAULT_MIDDLE_PAGE, MIN_MIDDLE_PAGE};
use serde_json::Value as JsValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Data required to draw the page strip.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderState {
    /// First page of the window.
    pub window_start: usize,

    /// Last page of the window.
    pub window_end: usize,

    /// Page to highlight.
    pub current_page: usize,

    /// Total number of pages.
    pub page_count: usize,
}

/// Paginator.
///
/// Drawing goes through a render pipeline that commits a [`RenderState`]
/// snapshot. Hosts draw the committed snapshot, so state changes that do not
/// run the pipeline, such as [`Paginator::reset_to_first_page`],
/// are not visible until the next render.
#[derive(Clone, PartialEq, Debug)]
pub struct Paginator {
    page_count: usize,
    current_page: usize,
    window_size: usize,
    window: PageWindow,

    /// Snapshot committed by the last render.
    rendered: Option<RenderState>,

    /// Number of times the render pipeline ran.
    renders: usize,
}

impl Paginator {
    /// Creates a paginator on the first page and renders it.
    pub fn new(config: PaginatorConfig) -> Self {
        let window_size = if config.middle_page >= MIN_MIDDLE_PAGE {
            config.middle_page
        } else {
            tracing::warn!(middle_page = config.middle_page, "invalid middle page, using default");
            DEFAULT_MIDDLE_PAGE
        };

        let mut paginator = Self {
            page_count: config.page_number,
            current_page: 1,
            window_size,
            window: calculate_window(1, config.page_number, window_size),
            rendered: None,
            renders: 0,
        };

        paginator.render();
        paginator
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Snapshot committed by the last render.
    /// `None` if nothing is rendered.
    pub fn rendered(&self) -> Option<&RenderState> {
        self.rendered.as_ref()
    }

    /// Number of times the render pipeline ran.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Current state, regardless of what was rendered.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            window_start: self.window.start,
            window_end: self.window.end,
            current_page: self.current_page,
            page_count: self.page_count,
        }
    }

    /// Sets the total number of pages and returns to the first page.
    #[tracing::instrument(skip(self))]
    pub fn change_page_number(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_page = 1;
        self.render();
    }

    /// Sets the total number of pages from a host supplied value.
    /// Values that are not non-negative integers are ignored.
    #[tracing::instrument(skip(self))]
    pub fn change_page_number_value(&mut self, page_count: &JsValue) {
        let Some(page_count) = page_count.as_u64() else {
            tracing::warn!("ignoring page number");
            return;
        };

        match usize::try_from(page_count) {
            Ok(page_count) => self.change_page_number(page_count),
            Err(err) => tracing::warn!(?err, "ignoring page number"),
        }
    }

    /// Returns to the first page without rendering.
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
        self.calculate();
    }

    /// Runs the render pipeline.
    pub fn force_rerender(&mut self) {
        self.render();
    }

    /// Handles a click on a page control.
    ///
    /// # Returns
    /// The new current page if the click was accepted.
    /// Clicks stepping past the first or last page, or targeting a page
    /// outside of the page range, are rejected.
    #[tracing::instrument(skip(self))]
    pub fn click(&mut self, control: PageControl) -> Option<usize> {
        if self.page_count <= 1 {
            return None;
        }

        let page = match control {
            PageControl::Previous if self.current_page > 1 => self.current_page - 1,
            PageControl::Next if self.current_page < self.page_count => self.current_page + 1,
            PageControl::Page(page) if (1..=self.page_count).contains(&page) => page,
            _ => {
                tracing::debug!("click rejected");
                return None;
            }
        };

        self.current_page = page;
        self.render();
        Some(page)
    }

    /// Draws the rendered snapshot.
    ///
    /// # Returns
    /// `None` if nothing is rendered or `renderer` returns `None`.
    pub fn render_with<T>(&self, renderer: impl FnOnce(&RenderState) -> Option<T>) -> Option<T> {
        self.rendered.as_ref().and_then(renderer)
    }

    /// Draws the rendered snapshot with the default layout.
    pub fn layout(&self) -> Option<Vec<PageItem>> {
        self.render_with(|state| Some(default_layout(state)))
    }

    fn calculate(&mut self) {
        self.window = calculate_window(self.current_page, self.page_count, self.window_size);
    }

    fn render(&mut self) {
        self.renders += 1;
        if self.page_count <= 1 {
            self.rendered = None;
            return;
        }

        self.calculate();
        self.rendered = Some(self.render_state());
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PaginatorConfig::default())
    }
}

#[cfg(test)]
#[path = "./paginator_test.rs"]
mod paginator_test;
