//! Menu entries.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use focusnav_controller::Selectable;

struct Entry {
    label: String,
    selected: Cell<bool>,
}

/// One menu entry. Clones share the selection marker.
#[derive(Clone)]
pub struct MenuItem(Rc<Entry>);

impl MenuItem {
    /// Create an unselected entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Rc::new(Entry {
            label: label.into(),
            selected: Cell::new(false),
        }))
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// Check if two handles refer to the same entry.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Selectable for MenuItem {
    fn set_selected(&self, selected: bool) {
        self.0.selected.set(selected);
    }

    fn is_selected(&self) -> bool {
        self.0.selected.get()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.0.label)
            .field("selected", &self.0.selected.get())
            .finish()
    }
}
