//! Reads rendered table markup back into rows and cells
//!
//! Only understands the markup produced by [`Renderer`](crate::render::Renderer):
//! rows inside `<tbody>`, `<td>` cells, an optional quoted `class` attribute.
//! A raw `</td>` always closes the cell, as it does in an HTML parser. Cell
//! text is the content with child tags dropped and entities decoded, like a
//! DOM `textContent`.

use crate::render::unescape_html;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub class: Option<String>,
    pub text: String,
}

impl Cell {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.as_deref().unwrap_or_default().split_whitespace()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: SmallVec<[Cell; 3]>,
}

impl Row {
    /// Text of the first cell, which holds the term
    pub fn term(&self) -> Option<&str> {
        self.cells.first().map(|cell| cell.text.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.cells.get(1).map(|cell| cell.text.as_str())
    }
}

/// Body rows of a rendered table, in document order
pub fn read_rows(html: &str) -> Vec<Row> {
    let body = match (html.find("<tbody>"), html.rfind("</tbody>")) {
        (Some(start), Some(end)) if start + "<tbody>".len() <= end => {
            &html[start + "<tbody>".len()..end]
        }
        _ => html,
    };

    let mut rows = Vec::new();
    let mut rest = body;
    while let Some((inner, after)) = next_element(rest, "<tr", "</tr>") {
        rows.push(read_row(inner.content));
        rest = after;
    }
    rows
}

fn read_row(html: &str) -> Row {
    let mut cells = SmallVec::new();
    let mut rest = html;
    while let Some((element, after)) = next_element(rest, "<td", "</td>") {
        cells.push(Cell {
            class: class_attribute(element.attributes).map(str::to_string),
            text: text_content(element.content),
        });
        rest = after;
    }
    Row { cells }
}

struct Element<'a> {
    attributes: &'a str,
    content: &'a str,
}

/// Find the next `open ... >content close` element. Returns it and the text after it.
fn next_element<'a>(html: &'a str, open: &str, close: &str) -> Option<(Element<'a>, &'a str)> {
    let start = html.find(open)? + open.len();
    let tag_end = start + html[start..].find('>')?;
    let content_end = tag_end + 1 + html[tag_end + 1..].find(close)?;

    let element = Element {
        attributes: &html[start..tag_end],
        content: &html[tag_end + 1..content_end],
    };
    Some((element, &html[content_end + close.len()..]))
}

/// Text between tags, entity-decoded
fn text_content(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        rest = match rest[open..].find('>') {
            Some(close) => &rest[open + close + 1..],
            // An unterminated tag swallows the rest of the cell
            None => "",
        };
    }
    text.push_str(rest);
    unescape_html(&text).into_owned()
}

fn class_attribute(attributes: &str) -> Option<&str> {
    let value = &attributes[attributes.find("class=")? + "class=".len()..];
    let quote = value.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let value = &value[1..];
    Some(&value[..value.find(quote)?])
}
