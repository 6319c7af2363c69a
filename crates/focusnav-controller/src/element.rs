//! Element traits.

use std::cell::RefCell;
use std::rc::Rc;

/// A UI element that can carry the "selected" marker.
///
/// The controller never creates or destroys elements. It only toggles the
/// marker, so implementors usually keep it in a `Cell`.
pub trait Selectable {
    /// Set or clear the marker.
    fn set_selected(&self, selected: bool);

    /// Whether the marker is currently set.
    fn is_selected(&self) -> bool;
}

impl<T: Selectable + ?Sized> Selectable for Rc<T> {
    fn set_selected(&self, selected: bool) {
        (**self).set_selected(selected);
    }

    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

/// A live container whose direct children are the selectables.
pub trait Container<E> {
    /// Current children in display order.
    fn children(&self) -> Vec<E>;
}

impl<E: Clone> Container<E> for RefCell<Vec<E>> {
    fn children(&self) -> Vec<E> {
        self.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Marker(Cell<bool>);

    impl Selectable for Marker {
        fn set_selected(&self, selected: bool) {
            self.0.set(selected);
        }

        fn is_selected(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_rc_forwards_marker() {
        let element = Rc::new(Marker(Cell::new(false)));
        let handle = Rc::clone(&element);
        handle.set_selected(true);
        assert!(element.is_selected());
    }

    #[test]
    fn test_refcell_vec_container_is_live() {
        let container = RefCell::new(vec![1, 2]);
        assert_eq!(container.children(), vec![1, 2]);
        container.borrow_mut().push(3);
        assert_eq!(container.children(), vec![1, 2, 3]);
    }
}
