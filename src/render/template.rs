//! Placeholder templates for the HTML output
//!
//! Templates are static sequences of literal text and named slots. Rendering
//! is a single pass over the segments, so text written into one slot is never
//! scanned for further placeholders (a term containing `%description` is
//! emitted as-is).

use std::fmt;

/// A named placeholder inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Term,
    Description,
    RemoveClass,
    Rows,
}

impl Slot {
    /// Placeholder spelling used when a template is displayed
    pub fn placeholder(&self) -> &'static str {
        match self {
            Slot::Term => "%word",
            Slot::Description => "%description",
            Slot::RemoveClass => "%removeClass",
            Slot::Rows => "%rows",
        }
    }
}

/// One piece of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    Slot(Slot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    segments: &'static [Segment],
}

impl Template {
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Slots in the order they appear
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Text(_) => None,
        })
    }

    /// Append the rendered template to `out`, asking `fill` to write each slot
    pub fn render_into(&self, out: &mut String, mut fill: impl FnMut(Slot, &mut String)) {
        for segment in self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(slot) => fill(*slot, out),
            }
        }
    }

    /// Upper bound of the literal text length, used to presize buffers
    pub fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.len(),
                Segment::Slot(_) => 0,
            })
            .sum()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Slot(slot) => f.write_str(slot.placeholder())?,
            }
        }
        Ok(())
    }
}

/// Row without a remove cell
pub const WORD_ROW: Template = Template::new(&[
    Segment::Text("<tr><td>"),
    Segment::Slot(Slot::Term),
    Segment::Text("</td><td>"),
    Segment::Slot(Slot::Description),
    Segment::Text("</td></tr>"),
]);

/// Row with a trailing remove cell
pub const WORD_ROW_WITH_REMOVE: Template = Template::new(&[
    Segment::Text("<tr><td>"),
    Segment::Slot(Slot::Term),
    Segment::Text("</td><td>"),
    Segment::Slot(Slot::Description),
    Segment::Text("</td><td class='"),
    Segment::Slot(Slot::RemoveClass),
    Segment::Text("'>×</td></tr>"),
]);

pub const WORD_TABLE: Template = Template::new(&[
    Segment::Text(
        "<table><thead><tr><th>Word</th><th>Description</th></tr></thead><tbody>",
    ),
    Segment::Slot(Slot::Rows),
    Segment::Text("</tbody></table>"),
]);
