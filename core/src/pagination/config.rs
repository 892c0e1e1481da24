//! Paginator configuration.
use crate::constants::DEFAULT_MIDDLE_PAGE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Paginator`](super::Paginator).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PaginatorConfig {
    /// Total number of pages.
    pub page_number: usize,

    /// Number of page slots displayed between the first and last page.
    /// Pages outside of the slots are collapsed.
    /// Values below [`MIN_MIDDLE_PAGE`](crate::constants::MIN_MIDDLE_PAGE)
    /// fall back to the default.
    pub middle_page: usize,
}

impl PaginatorConfig {
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number,
            ..Self::default()
        }
    }
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_number: 0,
            middle_page: DEFAULT_MIDDLE_PAGE,
        }
    }
}
