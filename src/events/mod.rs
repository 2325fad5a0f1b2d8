//! Click handling: bridges remove clicks on rendered rows to list mutations
//!
//! The handler owns no state. It is given a container to listen on and a
//! [`Capabilities`] bundle holding the shared list and the renderer. Each
//! remove click mutates the list and replaces the container content with a
//! fresh render, all inside the one callback.

mod memory;

pub use memory::{MemoryContainer, MemoryTarget};

use crate::error::Result;
use crate::render::Renderer;
use crate::words::WordList;
use std::cell::RefCell;
use std::rc::Rc;

/// Element a click originated on
pub trait ClickTarget {
    fn has_class(&self, class: &str) -> bool;

    /// Text of the first cell of the table row enclosing this target
    fn row_term(&self) -> Option<String>;
}

/// Listener invoked with the click target, if any
pub type ClickListener<T> = Box<dyn FnMut(Option<&T>)>;

/// Surface the word table is rendered into and clicks are observed on
pub trait Container: Clone + 'static {
    type Target: ClickTarget;

    /// Replace the whole rendered subtree
    fn replace_content(&self, html: &str);

    fn add_click_listener(&self, listener: ClickListener<Self::Target>) -> Result<()>;
}

/// What a click handler may touch
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub word_list: Rc<RefCell<WordList>>,
    pub renderer: Rc<Renderer>,
}

impl Capabilities {
    pub fn new(word_list: Rc<RefCell<WordList>>, renderer: Rc<Renderer>) -> Self {
        Self {
            word_list,
            renderer,
        }
    }

    /// Render the current list state
    pub fn render(&self) -> String {
        self.renderer.render_word_list(&self.word_list.borrow())
    }
}

/// Result of dispatching a single click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Removed { term: String, removed: usize },
}

/// Attach the delegated remove listener. An absent container is a no-op and
/// returns `Ok(false)`.
pub fn attach_handlers<C: Container>(container: Option<&C>, capabilities: Capabilities) -> Result<bool> {
    let Some(container) = container else {
        log::debug!("no container, handlers not attached");
        return Ok(false);
    };

    let surface = container.clone();
    container.add_click_listener(Box::new(move |target: Option<&C::Target>| {
        handle_click(&surface, &capabilities, target);
    }))?;
    Ok(true)
}

/// Handle one click on `container`
pub fn handle_click<C: Container>(
    container: &C,
    capabilities: &Capabilities,
    target: Option<&C::Target>,
) -> ClickOutcome {
    let Some(target) = target else {
        return ClickOutcome::Ignored;
    };
    if !target.has_class(capabilities.renderer.remove_class()) {
        return ClickOutcome::Ignored;
    }
    let Some(term) = target.row_term() else {
        log::warn!("remove click outside a table row ignored");
        return ClickOutcome::Ignored;
    };

    let removed = capabilities.word_list.borrow_mut().remove_word(&term);
    container.replace_content(&capabilities.render());

    ClickOutcome::Removed { term, removed }
}
