//! Crossword word list: the core behind a small word/description table UI
//!
//! This crate provides:
//! - An ordered word list model with add, remove, and update
//! - Placeholder-template HTML rendering with an explicit escaping step
//! - Remove-click handling over an abstract container (DOM or in-memory)
//! - WASM bindings wiring it all to a browser page

pub mod error;
pub mod events;
pub mod render;
pub mod wasm;
pub mod words;

// Re-export WASM types for direct use
pub use wasm::WasmWordList;

// Re-export primary types
pub use error::{Result, WordListError};
pub use events::{
    attach_handlers, handle_click, Capabilities, ClickOutcome, ClickTarget, Container,
    MemoryContainer, MemoryTarget,
};
pub use render::{render_app_shell, Escaping, RenderConfig, Renderer, RowLayout};
pub use words::{sample_word_list, Word, WordList};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::read_rows;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rows_of(list: &WordList) -> Vec<(String, String)> {
        read_rows(&Renderer::default().render_word_list(list))
            .into_iter()
            .map(|row| {
                (
                    row.term().unwrap_or_default().to_string(),
                    row.description().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_remove_click_on_first_row() {
        let words = Rc::new(RefCell::new(
            [("класс", "d1"), ("функция", "d2")].into_iter().collect::<WordList>(),
        ));
        let capabilities = Capabilities::new(Rc::clone(&words), Rc::new(Renderer::default()));

        let container = MemoryContainer::new();
        container.replace_content(&capabilities.render());
        attach_handlers(Some(&container), capabilities).unwrap();

        let rows = read_rows(&container.inner_html());
        let index = rows.iter().position(|row| row.term() == Some("класс")).unwrap();
        let target = container.cell_target(index, 2).unwrap();
        container.click(Some(&target));

        let rows = read_rows(&container.inner_html());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].term(), Some("функция"));
        assert_eq!(rows[0].description(), Some("d2"));
    }

    #[test]
    fn test_duplicate_terms_all_removed() {
        let mut list = WordList::new();
        list.add_word("x", "y");
        list.add_word("x", "z");
        list.remove_word("x");

        assert!(rows_of(&list).iter().all(|(term, _)| term != "x"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_sample_list_renders() {
        let list = sample_word_list();
        let rows = rows_of(&list);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, "класс");
        assert_eq!(rows[3].0, "алгоритм");
    }

    // Plain text without markup characters, so verbatim output reads back exactly
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zа-я0-9 %]{0,12}"
    }

    fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[a-d]{1,2}", plain_text()), 0..16)
    }

    proptest! {
        #[test]
        fn prop_rows_match_entries(entries in entries()) {
            let list: WordList = entries.iter().cloned().collect();
            prop_assert_eq!(rows_of(&list), entries);
        }

        #[test]
        fn prop_removed_term_never_rendered(entries in entries(), term in "[a-d]{1,2}") {
            let mut list: WordList = entries.iter().cloned().collect();
            list.remove_word(&term);

            let rows = rows_of(&list);
            prop_assert!(rows.iter().all(|(t, _)| t != &term));
            let kept: Vec<_> = entries.into_iter().filter(|(t, _)| t != &term).collect();
            prop_assert_eq!(rows, kept);
        }

        #[test]
        fn prop_update_changes_only_first_match(
            entries in entries(),
            term in "[a-d]{1,2}",
            description in plain_text(),
        ) {
            let mut list: WordList = entries.iter().cloned().collect();
            let result = list.update_word(&term, description.clone());

            let mut expected = entries.clone();
            match expected.iter_mut().find(|(t, _)| t == &term) {
                Some(entry) => {
                    prop_assert!(result.is_ok());
                    entry.1 = description;
                }
                None => {
                    prop_assert_eq!(result, Err(WordListError::NotFound(term.clone())));
                }
            }
            prop_assert_eq!(rows_of(&list), expected);
        }

        #[test]
        fn prop_render_word_embeds_text(term in plain_text(), description in plain_text()) {
            let row = Renderer::default().render_word(&Word::new(term.clone(), description.clone()));
            prop_assert!(row.contains(&term));
            prop_assert!(row.contains(&description));
        }

        #[test]
        fn prop_html_escaping_reads_back(term in ".{0,12}", description in ".{0,12}") {
            let renderer = Renderer::new(RenderConfig {
                escaping: Escaping::Html,
                ..RenderConfig::default()
            }).unwrap();
            let mut list = WordList::new();
            list.add_word(term.clone(), description.clone());

            let rows = read_rows(&renderer.render_word_list(&list));
            prop_assert_eq!(rows.len(), 1);
            prop_assert_eq!(rows[0].term(), Some(term.as_str()));
            prop_assert_eq!(rows[0].description(), Some(description.as_str()));
        }
    }
}
