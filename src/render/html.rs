//! HTML rendering of words and word lists

use crate::error::Result;
use crate::render::template::{Slot, Template, WORD_ROW, WORD_ROW_WITH_REMOVE, WORD_TABLE};
use crate::render::{RenderConfig, RowLayout};
use crate::words::{Word, WordList};

/// Id of the element the word table is rendered into
pub const WORD_LIST_ID: &str = "word-list";

const APP_SHELL_HEAD: &str = "<div><h1>Crossword</h1><div id=\"word-list\"></div>";
const APP_SHELL_TAIL: &str = "</div>";
// The Save button is markup only; no listener is attached to it.
const WORD_FORM: &str = concat!(
    "<div id=\"word-form\">",
    "<input name=\"word\" type=\"text\" placeholder=\"Word\" />",
    "<input name=\"description\" type=\"text\" placeholder=\"Description\" />",
    "<button type=\"button\">Save</button>",
    "</div>"
);

/// Stateless renderer. Output depends only on the config and the list passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn remove_class(&self) -> &str {
        &self.config.remove_class
    }

    pub fn row_template(&self) -> Template {
        match self.config.layout {
            RowLayout::Plain => WORD_ROW,
            RowLayout::WithRemove => WORD_ROW_WITH_REMOVE,
        }
    }

    /// Render one table row
    pub fn render_word(&self, word: &Word) -> String {
        let mut out = String::with_capacity(self.row_capacity(word));
        self.write_word(&mut out, word);
        out
    }

    /// Render the full table, one row per entry in list order
    pub fn render_word_list(&self, list: &WordList) -> String {
        let capacity = WORD_TABLE.literal_len()
            + list.iter().map(|word| self.row_capacity(word)).sum::<usize>();
        let mut out = String::with_capacity(capacity);

        WORD_TABLE.render_into(&mut out, |slot, out| {
            if slot == Slot::Rows {
                for word in list {
                    self.write_word(out, word);
                }
            }
        });
        out
    }

    fn write_word(&self, out: &mut String, word: &Word) {
        let escaping = self.config.escaping;
        self.row_template().render_into(out, |slot, out| match slot {
            Slot::Term => escaping.write(out, word.term()),
            Slot::Description => escaping.write(out, word.description()),
            Slot::RemoveClass => out.push_str(&self.config.remove_class),
            Slot::Rows => {}
        });
    }

    fn row_capacity(&self, word: &Word) -> usize {
        self.row_template().literal_len()
            + self.config.remove_class.len()
            + word.term().len()
            + word.description().len()
    }
}

/// Page skeleton with the word list container and, optionally, the add-word form
pub fn render_app_shell(with_form: bool) -> String {
    let mut out = String::from(APP_SHELL_HEAD);
    if with_form {
        out.push_str(WORD_FORM);
    }
    out.push_str(APP_SHELL_TAIL);
    out
}
