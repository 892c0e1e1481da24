#![cfg(target_arch = "wasm32")]
//! Tests for `widgets/pagination`.
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use tagpage_core::pagination::PaginatorConfig;
use tagpage_ui::widgets::Pagination;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct AppProps {
    page_number: usize,
    pages: Rc<RefCell<Vec<usize>>>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let onchange = {
        let pages = props.pages.clone();

        Callback::from(move |page: usize| {
            pages.borrow_mut().push(page);
        })
    };

    html! {
        <Pagination config={PaginatorConfig::new(props.page_number)} {onchange} />
    }
}

// ******************
// *** Pagination ***
// ******************

#[wasm_bindgen_test]
async fn pagination_should_render_default_layout() {
    let pages = Rc::new(RefCell::new(Vec::new()));
    let root = mount(20, pages.clone()).await;

    assert_eq!(
        vec!["<", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "...", "20", ">"],
        labels(&root)
    );

    let current = root
        .get_elements_by_class_name("page-current")
        .item(0)
        .expect("current page should exist");

    assert_eq!(Some("1".to_string()), current.text_content());
}

#[wasm_bindgen_test]
async fn pagination_should_render_nothing_for_one_page() {
    let pages = Rc::new(RefCell::new(Vec::new()));
    let root = mount(1, pages.clone()).await;
    assert!(labels(&root).is_empty());
}

#[wasm_bindgen_test]
async fn pagination_click_should_change_page() {
    let pages = Rc::new(RefCell::new(Vec::new()));
    let root = mount(20, pages.clone()).await;

    click_label(&root, ">").await;
    click_label(&root, "20").await;
    assert_eq!(vec![2, 20], *pages.borrow());

    let current = root
        .get_elements_by_class_name("page-current")
        .item(0)
        .expect("current page should exist");

    assert_eq!(Some("20".to_string()), current.text_content());

    // the window opens up to page 2 near the last page
    assert!(!labels(&root).iter().any(|label| label == "..."));
    assert_eq!(Some("2"), labels(&root).get(2).map(String::as_str));

    // next is disabled on the last page
    click_label(&root, ">").await;
    assert_eq!(vec![2, 20], *pages.borrow());

    click_label(&root, "10").await;
    assert_eq!(
        vec![
            "<", "1", "...", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "...", "20",
            ">"
        ],
        labels(&root)
    );

    click_label(&root, "...").await;
    assert_eq!(vec![2, 20, 10], *pages.borrow());
}

// ***************
// *** helpers ***
// ***************

async fn mount(page_number: usize, pages: Rc<RefCell<Vec<usize>>>) -> web_sys::Element {
    let document = web_sys::window()
        .expect("window should exist")
        .document()
        .expect("document should exist");

    let root = document.create_element("div").expect("could not create root");
    document
        .body()
        .expect("body should exist")
        .append_child(&root)
        .expect("could not mount root");

    yew::Renderer::<App>::with_root_and_props(root.clone(), AppProps { page_number, pages })
        .render();

    TimeoutFuture::new(10).await;
    root
}

fn labels(root: &web_sys::Element) -> Vec<String> {
    let items = root.get_elements_by_tag_name("li");
    (0..items.length())
        .filter_map(|index| items.item(index))
        .map(|item| item.text_content().unwrap_or_default())
        .collect()
}

async fn click_label(root: &web_sys::Element, label: &str) {
    let items = root.get_elements_by_tag_name("li");
    let item = (0..items.length())
        .filter_map(|index| items.item(index))
        .find(|item| item.text_content().as_deref() == Some(label))
        .expect("item should exist");

    item.dyn_into::<web_sys::HtmlElement>()
        .expect("item should be an html element")
        .click();

    TimeoutFuture::new(10).await;
}
