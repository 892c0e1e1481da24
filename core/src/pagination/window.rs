//! Range of pages displayed without collapsing.
use std::ops::RangeInclusive;

/// Inclusive range of page numbers displayed between the first and last page.
/// The window is empty if `start > end`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Calculates which pages are displayed without collapsing.
///
/// `window_size` pages are centered on the current page where possible.
/// Near the first page the window holds `window_size` pages starting at 2.
/// Near the last page it opens up to every page from 2 to `page_count - 1`.
///
/// # Returns
/// A window whose `start` is at least 2 and whose `end` is at most `page_count - 1`.
/// The window is empty if there are no pages between the first and last.
pub fn calculate_window(current_page: usize, page_count: usize, window_size: usize) -> PageWindow {
    let current = current_page as isize;
    let count = page_count as isize;
    let size = window_size as isize;

    let before = size / 2;
    let after = size - 1 - before;

    let (start, end) = if current <= before + 2 {
        (2, (size + 1).min(count - 1))
    } else if current >= count - after - 1 {
        ((count - size).min(2).max(2), count - 1)
    } else {
        (current - before, current + after)
    };

    // `end` below 2 only occurs for an empty window
    PageWindow::new(start as usize, end.max(1) as usize)
}

#[cfg(test)]
#[path = "./window_test.rs"]
mod window_test;
