//! Text escaping for embedded terms and descriptions

use serde::Deserialize;
use std::borrow::Cow;

/// How text is embedded into rendered markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Escaping {
    /// Embed text unchanged. Markup inside a term ends up in the page.
    #[default]
    Verbatim,
    /// Replace HTML-significant characters with entities
    Html,
}

impl Escaping {
    pub fn write(&self, out: &mut String, text: &str) {
        match self {
            Escaping::Verbatim => out.push_str(text),
            Escaping::Html => escape_html_into(out, text),
        }
    }
}

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

pub fn escape_html_into(out: &mut String, text: &str) {
    out.reserve(text.len());
    for ch in text.chars() {
        match ENTITIES.iter().find(|(c, _)| *c == ch) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

/// Decode the entities produced by [`escape_html`]. Unknown entities are kept.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match ENTITIES.iter().find(|(_, entity)| rest.starts_with(entity)) {
            Some((ch, entity)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
