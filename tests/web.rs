//! Browser tests for the DOM wiring. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use crossword_list::wasm::{attach_handlers, mount};
use crossword_list::WasmWordList;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn detached_div() -> Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("div")
        .unwrap()
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn remove_click_rerenders_container() {
    let list = WasmWordList::new();
    list.add_word("класс", "d1");
    list.add_word("функция", "d2");

    let container = detached_div();
    container.set_inner_html(&list.render());
    assert_eq!(attach_handlers(Some(container.clone()), &list).ok(), Some(true));

    let remove = container.query_selector("tr td.remove-button").unwrap().unwrap();
    click(&remove);

    assert_eq!(list.length(), 1);
    assert_eq!(container.query_selector_all("tbody tr").unwrap().length(), 1);
    let first = container.query_selector("tbody td").unwrap().unwrap();
    assert_eq!(first.text_content().unwrap(), "функция");
}

#[wasm_bindgen_test]
fn click_on_term_cell_is_ignored() {
    let list = WasmWordList::sample();
    let container = detached_div();
    container.set_inner_html(&list.render());
    assert!(attach_handlers(Some(container.clone()), &list).is_ok());

    let term = container.query_selector("tbody td").unwrap().unwrap();
    click(&term);

    assert_eq!(list.length(), 4);
}

#[wasm_bindgen_test]
fn missing_container_is_noop() {
    let list = WasmWordList::sample();
    assert_eq!(attach_handlers(None, &list).ok(), Some(false));
}

#[wasm_bindgen_test]
fn mount_renders_shell_and_list() {
    let list = WasmWordList::sample();
    let root = detached_div();
    assert!(mount(&root, &list, true).is_ok());

    assert!(root.query_selector("#word-form button").unwrap().is_some());
    let rows = root.query_selector_all("#word-list tbody tr").unwrap();
    assert_eq!(rows.length(), 4);

    let remove = root.query_selector("#word-list td.remove-button").unwrap().unwrap();
    click(&remove);
    assert_eq!(list.length(), 3);
    assert_eq!(root.query_selector_all("#word-list tbody tr").unwrap().length(), 3);
}
