//! Default page strip layout and the controls it is made of.
use super::RenderState;
use crate::constants::{
    PAGE_CURRENT_CLASS, PAGE_DISABLED_CLASS, PAGE_MORE_CLASS, PAGE_NEXT_CLASS,
    PAGE_NUMBER_CLASS, PAGE_PREVIOUS_CLASS,
};

// *****************
// *** Page Item ***
// *****************

/// A single entry of the page strip.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageItem {
    /// Go to the previous page.
    Previous { disabled: bool },

    /// Go to a specific page.
    Number { page: usize, current: bool },

    /// Collapsed pages.
    Ellipsis,

    /// Go to the next page.
    Next { disabled: bool },
}

impl PageItem {
    /// Classes identifying the item to click delegation.
    pub fn classes(&self) -> Vec<&'static str> {
        match self {
            Self::Previous { disabled } => {
                with_modifier(PAGE_PREVIOUS_CLASS, *disabled, PAGE_DISABLED_CLASS)
            }
            Self::Number { current, .. } => {
                with_modifier(PAGE_NUMBER_CLASS, *current, PAGE_CURRENT_CLASS)
            }
            Self::Ellipsis => vec![PAGE_MORE_CLASS],
            Self::Next { disabled } => {
                with_modifier(PAGE_NEXT_CLASS, *disabled, PAGE_DISABLED_CLASS)
            }
        }
    }

    /// Displayed text.
    pub fn label(&self) -> String {
        match self {
            Self::Previous { .. } => "<".to_string(),
            Self::Number { page, .. } => page.to_string(),
            Self::Ellipsis => "...".to_string(),
            Self::Next { .. } => ">".to_string(),
        }
    }
}

fn with_modifier(class: &'static str, active: bool, modifier: &'static str) -> Vec<&'static str> {
    if active {
        vec![class, modifier]
    } else {
        vec![class]
    }
}

/// Lays out the default page strip.
///
/// # Returns
/// The previous control, the first page, the window surrounded by ellipses
/// where pages are collapsed, the last page, and the next control.
/// Empty if there are fewer than two pages.
pub fn default_layout(state: &RenderState) -> Vec<PageItem> {
    let RenderState {
        window_start,
        window_end,
        current_page,
        page_count,
    } = *state;

    if page_count < 2 {
        return Vec::new();
    }

    let mut items = vec![
        PageItem::Previous {
            disabled: current_page == 1,
        },
        PageItem::Number {
            page: 1,
            current: current_page == 1,
        },
    ];

    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }

    if window_start <= window_end {
        items.extend((window_start..=window_end).map(|page| PageItem::Number {
            page,
            current: page == current_page,
        }));
    }

    if window_end + 1 < page_count {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Number {
        page: page_count,
        current: current_page == page_count,
    });

    items.push(PageItem::Next {
        disabled: current_page >= page_count,
    });

    items
}

// ********************
// *** Page Control ***
// ********************

/// A clickable page strip control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageControl {
    Previous,
    Next,
    Page(usize),
}

impl PageControl {
    /// Identifies a clicked element of the page strip from its classes and text.
    ///
    /// # Returns
    /// `None` if the element is an ellipsis, is disabled,
    /// or its text is not a page number.
    pub fn from_element(class_name: &str, text: &str) -> Option<Self> {
        let has_class = |class: &str| class_name.split_whitespace().any(|c| c == class);
        if has_class(PAGE_MORE_CLASS) || has_class(PAGE_DISABLED_CLASS) {
            return None;
        }

        if has_class(PAGE_PREVIOUS_CLASS) {
            Some(Self::Previous)
        } else if has_class(PAGE_NEXT_CLASS) {
            Some(Self::Next)
        } else {
            text.trim().parse().ok().map(Self::Page)
        }
    }
}

#[cfg(test)]
#[path = "./layout_test.rs"]
mod layout_test;
