use crate::modal::{ModalPhase, ModalState, FADED_CLASS, HIDDEN_CLASS, SCROLL_LOCK_CLASS};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Something with a class list the lightbox can flip flags on.
pub trait ClassToggle {
    fn toggle_class(&self, name: &str, on: bool);

    fn has_class(&self, name: &str) -> bool;

    /// Force the renderer to compute styles for the current class list.
    fn flush_style(&self) {}
}

impl ClassToggle for web_sys::HtmlElement {
    fn toggle_class(&self, name: &str, on: bool) {
        if let Err(err) = self.class_list().toggle_with_force(name, on) {
            tracing::warn!(class = name, ?err, "failed to toggle class");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn flush_style(&self) {
        // Reading layout forces a style recalc.
        let _ = self.offset_height();
    }
}

/// In-memory class list.
#[derive(Debug, Default)]
pub struct ClassSet {
    classes: RefCell<BTreeSet<String>>,
    flushes: Cell<usize>,
}

impl ClassSet {
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            flushes: Cell::new(0),
        }
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.get()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassToggle for ClassSet {
    fn toggle_class(&self, name: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(name.to_string());
        } else {
            classes.remove(name);
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    fn flush_style(&self) {
        self.flushes.set(self.flushes.get() + 1);
    }
}

/// Project the modal state onto the overlay's class list.
pub fn sync_overlay(overlay: &impl ClassToggle, state: &ModalState) {
    let classes = state.overlay_classes();
    overlay.toggle_class(HIDDEN_CLASS, classes.hidden);
    overlay.toggle_class(FADED_CLASS, classes.faded);
    if state.phase() == ModalPhase::Opening {
        // The faded style has to be computed before the next frame removes
        // it, or the fade-in is skipped.
        overlay.flush_style();
    }
}

pub fn sync_scroll_lock(body: &impl ClassToggle, state: &ModalState) {
    body.toggle_class(SCROLL_LOCK_CLASS, state.scroll_locked());
}
