//! Crossword word list CLI (for trying the core outside a browser)
//! The main interface is through WASM bindings.
//!
//! Usage: crossword-list [CONFIG.json]

#[cfg(not(target_arch = "wasm32"))]
use crossword_list::{
    attach_handlers, sample_word_list, Capabilities, Container, MemoryContainer, RenderConfig,
    Renderer, Result, WordListError,
};
#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use std::rc::Rc;

// The browser entry point is the wasm start hook
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|err| WordListError::Config(format!("{}: {}", path, err)))?;
            RenderConfig::from_json(&json)?
        }
        None => RenderConfig::default(),
    };

    let capabilities = Capabilities::new(
        Rc::new(RefCell::new(sample_word_list())),
        Rc::new(Renderer::new(config)?),
    );

    let container = MemoryContainer::new();
    container.replace_content(&capabilities.render());
    attach_handlers(Some(&container), capabilities.clone())?;
    println!("{}", container.inner_html());

    // Click the last cell of the first row; only a remove cell reacts
    let last_cell = container
        .cell_target(0, 2)
        .or_else(|| container.cell_target(0, 1));
    if let Some(target) = last_cell {
        container.click(Some(&target));
        log::info!(
            "after clicking the first row: {} entries left",
            capabilities.word_list.borrow().len()
        );
        println!("{}", container.inner_html());
    }
    Ok(())
}
