//! In-memory container: holds rendered markup and dispatches synthetic clicks

use crate::error::Result;
use crate::events::{ClickListener, ClickTarget, Container};
use crate::render::read_rows;
use std::cell::RefCell;
use std::rc::Rc;

/// A click target resolved from rendered markup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryTarget {
    pub classes: Vec<String>,
    pub row_term: Option<String>,
}

impl MemoryTarget {
    pub fn new<I, S>(classes: I, row_term: Option<impl Into<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            row_term: row_term.map(Into::into),
        }
    }
}

impl ClickTarget for MemoryTarget {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn row_term(&self) -> Option<String> {
        self.row_term.clone()
    }
}

#[derive(Default)]
struct Surface {
    html: RefCell<String>,
    // Kept apart from `html` so listeners can re-render during dispatch
    listeners: RefCell<Vec<ClickListener<MemoryTarget>>>,
}

/// Container backed by a string. Clones share the same surface.
#[derive(Clone, Default)]
pub struct MemoryContainer {
    surface: Rc<Surface>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_html(&self) -> String {
        self.surface.html.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.surface.listeners.borrow().len()
    }

    /// Resolve the target for a click on cell `cell` of body row `row`
    pub fn cell_target(&self, row: usize, cell: usize) -> Option<MemoryTarget> {
        let rows = read_rows(&self.surface.html.borrow());
        let row = rows.get(row)?;
        let cell = row.cells.get(cell)?;

        Some(MemoryTarget {
            classes: cell.classes().map(str::to_string).collect(),
            row_term: row.term().map(str::to_string),
        })
    }

    /// Dispatch a click to every attached listener. Listeners added during
    /// dispatch are kept but only see later clicks.
    pub fn click(&self, target: Option<&MemoryTarget>) {
        let mut dispatching = std::mem::take(&mut *self.surface.listeners.borrow_mut());
        for listener in dispatching.iter_mut() {
            listener(target);
        }

        let mut listeners = self.surface.listeners.borrow_mut();
        let added = std::mem::replace(&mut *listeners, dispatching);
        listeners.extend(added);
    }
}

impl std::fmt::Debug for MemoryContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryContainer")
            .field("html", &self.surface.html.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Container for MemoryContainer {
    type Target = MemoryTarget;

    fn replace_content(&self, html: &str) {
        *self.surface.html.borrow_mut() = html.to_string();
    }

    fn add_click_listener(&self, listener: ClickListener<MemoryTarget>) -> Result<()> {
        self.surface.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_surface() {
        let container = MemoryContainer::new();
        let other = container.clone();
        other.replace_content("<p>hi</p>");
        assert_eq!(container.inner_html(), "<p>hi</p>");
    }

    #[test]
    fn test_cell_target_from_markup() {
        let container = MemoryContainer::new();
        container.replace_content(
            "<table><tbody><tr><td>a</td><td>b</td><td class='remove-button'>×</td></tr></tbody></table>",
        );

        let target = container.cell_target(0, 2).unwrap();
        assert!(target.has_class("remove-button"));
        assert_eq!(target.row_term(), Some("a".to_string()));

        let term_cell = container.cell_target(0, 0).unwrap();
        assert!(term_cell.classes.is_empty());
        assert!(container.cell_target(1, 0).is_none());
    }

    #[test]
    fn test_click_reaches_listeners() {
        let container = MemoryContainer::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        container
            .add_click_listener(Box::new(move |target: Option<&MemoryTarget>| {
                sink.borrow_mut().push(target.cloned());
            }))
            .unwrap();

        let target = MemoryTarget::new(["x"], Some("t"));
        container.click(Some(&target));
        container.click(None);

        assert_eq!(*seen.borrow(), vec![Some(target), None]);
    }

    #[test]
    fn test_listener_can_attach_during_dispatch() {
        let container = MemoryContainer::new();
        let calls = Rc::new(RefCell::new(0));

        let surface = container.clone();
        let counter = Rc::clone(&calls);
        container
            .add_click_listener(Box::new(move |_: Option<&MemoryTarget>| {
                let counter = Rc::clone(&counter);
                surface
                    .add_click_listener(Box::new(move |_: Option<&MemoryTarget>| {
                        *counter.borrow_mut() += 1;
                    }))
                    .unwrap();
            }))
            .unwrap();

        container.click(None);
        assert_eq!(container.listener_count(), 2);
        assert_eq!(*calls.borrow(), 0);

        container.click(None);
        assert_eq!(container.listener_count(), 3);
        assert_eq!(*calls.borrow(), 1);
    }
}
