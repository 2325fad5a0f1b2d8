//! Render output: HTML templates, escaping, and reading rendered tables back

mod config;
mod escape;
mod html;
mod table;
pub mod template;

pub use config::{RenderConfig, RowLayout, DEFAULT_REMOVE_CLASS};
pub use escape::{escape_html, escape_html_into, unescape_html, Escaping};
pub use html::{render_app_shell, Renderer, WORD_LIST_ID};
pub use table::{read_rows, Cell, Row};
pub use template::{Segment, Slot, Template};
