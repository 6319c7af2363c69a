//! Keeping the selectable set in step with an explicit element sequence.
//!
//! The subscription is taken when the controller is built and lives as long
//! as the controller, mounted or not. When the sequence changes, the set is
//! re-resolved. The selected index is left alone, so after an insertion or
//! removal it may name a different element than before; owners that care
//! call `select` themselves. Under [`ShrinkPolicy::Clamp`] an index left past
//! the end is pulled back to the new last element, and the marker moves with
//! it.

use std::rc::{Rc, Weak};

use focusnav_core::ShrinkPolicy;

use crate::controller::Shared;
use crate::element::Selectable;

impl<E: Selectable + Clone + 'static> Shared<E> {
    /// Subscribe to the explicit sequence, if that is the source.
    pub(crate) fn observe(self: &Rc<Self>) {
        let Some(elements) = self.source.as_ref().and_then(|s| s.observable()) else {
            return;
        };
        let weak: Weak<Self> = Rc::downgrade(self);
        let subscription = elements.subscribe(move || {
            if let Some(shared) = weak.upgrade() {
                shared.elements_changed();
            }
        });
        self.state.borrow_mut().subscription = Some(subscription);
    }

    fn elements_changed(&self) {
        let previous = self.selected_element();
        self.refresh();

        let clamped = {
            let mut state = self.state.borrow_mut();
            let len = state.selectables.len();
            let stale = len > 0 && state.selected_index >= len;
            tracing::trace!(target: "focusnav", len, index = state.selected_index, stale, "selectables changed");
            if stale && self.options.shrink_policy == ShrinkPolicy::Clamp {
                state.selected_index = len - 1;
                state.selectables.last().cloned()
            } else {
                None
            }
        };

        if let Some(element) = clamped {
            // The old element may have survived at another position.
            if let Some(previous) = previous {
                previous.set_selected(false);
            }
            element.set_selected(true);
        }
    }
}
