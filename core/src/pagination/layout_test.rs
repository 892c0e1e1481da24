use super::*;
use crate::pagination::calculate_window;

#[test]
fn default_layout_should_be_empty_with_less_than_two_pages() {
    assert!(default_layout(&state(1, 0, 10)).is_empty());
    assert!(default_layout(&state(1, 1, 10)).is_empty());
}

#[test]
fn default_layout_at_first_page_should_work() {
    let items = default_layout(&state(1, 20, 10));
    let labels = items.iter().map(PageItem::label).collect::<Vec<_>>();
    assert_eq!(
        vec!["<", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "...", "20", ">"],
        labels
    );

    assert_eq!(PageItem::Previous { disabled: true }, items[0]);
    assert_eq!(PageItem::Number { page: 1, current: true }, items[1]);
    assert_eq!(PageItem::Next { disabled: false }, items[items.len() - 1]);
}

#[test]
fn default_layout_in_middle_should_have_two_ellipses() {
    let items = default_layout(&state(10, 20, 4));
    let labels = items.iter().map(PageItem::label).collect::<Vec<_>>();
    assert_eq!(vec!["<", "1", "...", "8", "9", "10", "11", "...", "20", ">"], labels);

    let current = items
        .iter()
        .filter(|item| matches!(item, PageItem::Number { current: true, .. }))
        .collect::<Vec<_>>();

    assert_eq!(vec![&PageItem::Number { page: 10, current: true }], current);
}

#[test]
fn default_layout_at_last_page_should_work() {
    let items = default_layout(&state(20, 20, 10));
    let labels = items.iter().map(PageItem::label).collect::<Vec<_>>();
    let mut expected = vec!["<".to_string()];
    expected.extend((1..=20).map(|page| page.to_string()));
    expected.push(">".to_string());
    assert_eq!(expected, labels);
    assert!(!items.contains(&PageItem::Ellipsis));

    assert_eq!(PageItem::Previous { disabled: false }, items[0]);
    assert_eq!(PageItem::Number { page: 20, current: true }, items[items.len() - 2]);
    assert_eq!(PageItem::Next { disabled: true }, items[items.len() - 1]);
}

#[test]
fn default_layout_with_two_pages_should_have_empty_window() {
    let items = default_layout(&state(2, 2, 10));
    let labels = items.iter().map(PageItem::label).collect::<Vec<_>>();
    assert_eq!(vec!["<", "1", "2", ">"], labels);
}

#[test]
fn page_item_classes_should_follow_markup_contract() {
    assert_eq!(
        vec!["page-pre", "page-disabled"],
        PageItem::Previous { disabled: true }.classes()
    );
    assert_eq!(vec!["page-next"], PageItem::Next { disabled: false }.classes());
    assert_eq!(
        vec!["page-number", "page-current"],
        PageItem::Number { page: 3, current: true }.classes()
    );
    assert_eq!(vec!["page-more"], PageItem::Ellipsis.classes());
}

#[test]
fn page_control_from_element_should_work() {
    assert_eq!(Some(PageControl::Previous), PageControl::from_element("page-pre", "<"));
    assert_eq!(Some(PageControl::Next), PageControl::from_element("page-next", ">"));
    assert_eq!(Some(PageControl::Page(7)), PageControl::from_element("page-number", " 7 "));
    assert_eq!(
        Some(PageControl::Page(3)),
        PageControl::from_element("page-number page-current", "3")
    );
}

#[test]
fn page_control_from_element_should_ignore_ellipsis_and_disabled() {
    assert_eq!(None, PageControl::from_element("page-more", "..."));
    assert_eq!(None, PageControl::from_element("page-pre page-disabled", "<"));
    assert_eq!(None, PageControl::from_element("page-next page-disabled", ">"));
    assert_eq!(None, PageControl::from_element("page-number", "abc"));
}

// ***************
// *** helpers ***
// ***************

fn state(current_page: usize, page_count: usize, window_size: usize) -> RenderState {
    let window = calculate_window(current_page, page_count, window_size);
    RenderState {
        window_start: window.start,
        window_end: window.end,
        current_page,
        page_count,
    }
}
