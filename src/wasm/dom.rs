//! DOM-backed container: the word table lives in a real element

use crate::error::{Result, WordListError};
use crate::events::{ClickListener, ClickTarget, Container};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

impl ClickTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn row_term(&self) -> Option<String> {
        let row = self.closest("tr").ok().flatten()?;
        let cell = row.query_selector("td").ok().flatten()?;
        cell.text_content()
    }
}

impl Container for Element {
    type Target = Element;

    fn replace_content(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn add_click_listener(&self, mut listener: ClickListener<Element>) -> Result<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok());
            listener(target.as_ref());
        });

        self.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| WordListError::Dom(format!("{:?}", err)))?;

        // The listener lives as long as the element
        closure.forget();
        Ok(())
    }
}
