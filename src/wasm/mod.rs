//! WASM bindings for the word list

mod dom;
mod logger;

use crate::events::{self, Capabilities, Container};
use crate::render::{self, RenderConfig, Renderer, WORD_LIST_ID};
use crate::words::{sample_word_list, WordList};
use crate::WordListError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::init(log::LevelFilter::Info);
}

/// WASM-exposed word list with its renderer
#[wasm_bindgen(js_name = WordList)]
pub struct WasmWordList {
    words: Rc<RefCell<WordList>>,
    renderer: Rc<Renderer>,
}

#[wasm_bindgen(js_class = WordList)]
impl WasmWordList {
    /// Create an empty list with the default renderer
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_parts(WordList::new(), Renderer::default())
    }

    /// Create an empty list rendered with a JSON config
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: &str) -> Result<WasmWordList, JsError> {
        let renderer = Renderer::new(RenderConfig::from_json(config)?)?;
        Ok(Self::from_parts(WordList::new(), renderer))
    }

    /// Create the starter list shown on first load
    pub fn sample() -> Self {
        Self::from_parts(sample_word_list(), Renderer::default())
    }

    #[wasm_bindgen(js_name = addWord)]
    pub fn add_word(&self, term: &str, description: &str) {
        self.words.borrow_mut().add_word(term, description);
    }

    /// Remove every entry with the term; returns how many were removed
    #[wasm_bindgen(js_name = removeWord)]
    pub fn remove_word(&self, term: &str) -> usize {
        self.words.borrow_mut().remove_word(term)
    }

    /// Throws if no entry has the term
    #[wasm_bindgen(js_name = updateWord)]
    pub fn update_word(&self, term: &str, description: &str) -> Result<(), JsError> {
        self.words.borrow_mut().update_word(term, description)?;
        Ok(())
    }

    /// Render the full table
    pub fn render(&self) -> String {
        self.capabilities().render()
    }

    /// Render the row at `index`, if any
    #[wasm_bindgen(js_name = renderWord)]
    pub fn render_word(&self, index: usize) -> Option<String> {
        let words = self.words.borrow();
        words.get(index).map(|word| self.renderer.render_word(word))
    }

    pub fn terms(&self) -> js_sys::Array {
        self.words
            .borrow()
            .terms()
            .map(JsValue::from_str)
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.words.borrow().len()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.words.borrow().version() as f64
    }
}

impl WasmWordList {
    fn from_parts(words: WordList, renderer: Renderer) -> Self {
        Self {
            words: Rc::new(RefCell::new(words)),
            renderer: Rc::new(renderer),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::new(Rc::clone(&self.words), Rc::clone(&self.renderer))
    }
}

impl Default for WasmWordList {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the remove-click handler to `container`. Returns false when no
/// container was given.
#[wasm_bindgen(js_name = attachHandlers)]
pub fn attach_handlers(container: Option<Element>, list: &WasmWordList) -> Result<bool, JsError> {
    Ok(events::attach_handlers(container.as_ref(), list.capabilities())?)
}

/// Page skeleton markup
#[wasm_bindgen(js_name = renderAppShell)]
pub fn render_app_shell(with_form: bool) -> String {
    render::render_app_shell(with_form)
}

/// Render the page shell into `root`, render the list, and wire the handler
#[wasm_bindgen]
pub fn mount(root: &Element, list: &WasmWordList, with_form: bool) -> Result<(), JsError> {
    root.set_inner_html(&render::render_app_shell(with_form));

    let container = root
        .query_selector(&format!("#{}", WORD_LIST_ID))
        .map_err(|err| WordListError::Dom(format!("{:?}", err)))?
        .ok_or_else(|| WordListError::Dom(format!("#{} not found after mount", WORD_LIST_ID)))?;

    let capabilities = list.capabilities();
    container.replace_content(&capabilities.render());
    events::attach_handlers(Some(&container), capabilities)?;

    log::info!("mounted word list with {} entries", list.length());
    Ok(())
}
