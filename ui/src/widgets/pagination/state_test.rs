use super::*;
use serde_json::json;

#[test]
fn reduce_should_work() {
    let state = Rc::new(PaginatorState::from(Paginator::new(PaginatorConfig::new(20))));
    let state = state.reduce(PaginatorAction::Click(PageControl::Next));
    assert_eq!(2, state.current_page());

    let state = state.reduce(PaginatorAction::ChangePageNumber(5));
    assert_eq!(1, state.current_page());
    assert_eq!(5, state.page_count());
}

#[test]
fn reset_to_first_page_should_wait_for_render() {
    let state = Rc::new(PaginatorState::from(Paginator::new(PaginatorConfig::new(20))));
    let state = state.reduce(PaginatorAction::Click(PageControl::Page(9)));
    let state = state.reduce(PaginatorAction::ResetToFirstPage);
    assert_eq!(1, state.current_page());
    assert_eq!(Some(9), state.rendered().map(|rendered| rendered.current_page));

    let state = state.reduce(PaginatorAction::ForceRerender);
    assert_eq!(Some(1), state.rendered().map(|rendered| rendered.current_page));
}

#[test]
fn change_page_number_value_should_ignore_invalid_values() {
    let state = Rc::new(PaginatorState::from(Paginator::new(PaginatorConfig::new(20))));
    let state = state.reduce(PaginatorAction::Click(PageControl::Page(4)));

    let state = state.reduce(PaginatorAction::ChangePageNumberValue(json!("12")));
    let state = state.reduce(PaginatorAction::ChangePageNumberValue(json!(-3)));
    let state = state.reduce(PaginatorAction::ChangePageNumberValue(json!(2.5)));
    assert_eq!(20, state.page_count());
    assert_eq!(4, state.current_page());

    let state = state.reduce(PaginatorAction::ChangePageNumberValue(json!(12)));
    assert_eq!(12, state.page_count());
    assert_eq!(1, state.current_page());
}
