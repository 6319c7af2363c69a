//! Shared handle to an action registry.

use std::cell::RefCell;
use std::rc::Rc;

use focusnav_core::{Action, ParseActionError};

use crate::handler::{HandlerId, PressHandler};
use crate::registry::ActionRegistry;

/// Cloneable handle to one [`ActionRegistry`].
///
/// Every clone refers to the same registry. Handlers run with no borrow held,
/// so a handler may install or remove slots (including its own) while running.
#[derive(Debug, Clone, Default)]
pub struct InputListener {
    registry: Rc<RefCell<ActionRegistry>>,
}

impl InputListener {
    /// Create a listener with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler, returning the one it displaced.
    pub fn install(&self, action: Action, handler: PressHandler) -> Option<PressHandler> {
        tracing::trace!(target: "focusnav::input", %action, id = %handler.id(), "install");
        self.registry.borrow_mut().install(action, handler)
    }

    /// Empty a slot, returning its handler.
    pub fn remove(&self, action: Action) -> Option<PressHandler> {
        tracing::trace!(target: "focusnav::input", %action, "remove");
        self.registry.borrow_mut().remove(action)
    }

    /// Hand a slot back if `owner` still occupies it. See [`ActionRegistry::release`].
    pub fn release(&self, action: Action, owner: HandlerId, previous: Option<PressHandler>) -> bool {
        let released = self.registry.borrow_mut().release(action, owner, previous);
        if !released {
            tracing::debug!(
                target: "focusnav::input",
                %action,
                owner = %owner,
                "slot taken over by another handler, leaving it in place"
            );
        }
        released
    }

    /// Press an action. Returns false when its slot is empty or its handler
    /// is dead.
    pub fn press(&self, action: Action) -> bool {
        // Clone out so the handler runs without the registry borrowed.
        let handler = self.registry.borrow().get(action).cloned();
        match handler.filter(PressHandler::is_live) {
            Some(handler) => {
                tracing::trace!(target: "focusnav::input", %action, id = %handler.id(), "press");
                handler.press();
                true
            }
            None => false,
        }
    }

    /// Press an action by its registry name.
    pub fn press_name(&self, name: &str) -> Result<bool, ParseActionError> {
        Action::parse(name).map(|action| self.press(action))
    }

    /// Check if a slot is occupied.
    pub fn contains(&self, action: Action) -> bool {
        self.registry.borrow().contains(action)
    }

    /// Id of the handler occupying a slot.
    pub fn handler_id(&self, action: Action) -> Option<HandlerId> {
        self.registry.borrow().handler_id(action)
    }

    /// Occupied slots, in installation order.
    pub fn bound_actions(&self) -> Vec<Action> {
        self.registry.borrow().bound_actions()
    }

    /// Empty every slot.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }

    /// Check if two handles share a registry.
    pub fn same_registry(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_registry() {
        let listener = InputListener::new();
        let other = listener.clone();
        other.install(Action::Down, PressHandler::new(|| {}));

        assert!(listener.contains(Action::Down));
        assert!(listener.same_registry(&other));
        assert!(!listener.same_registry(&InputListener::new()));
    }

    #[test]
    fn test_handler_can_remove_itself() {
        let listener = InputListener::new();
        let inner = listener.clone();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        listener.install(
            Action::Continue,
            PressHandler::new(move || {
                flag.set(true);
                inner.remove(Action::Continue);
            }),
        );

        assert!(listener.press(Action::Continue));
        assert!(fired.get());
        assert!(!listener.contains(Action::Continue));
        assert!(!listener.press(Action::Continue));
    }

    #[test]
    fn test_dead_handler_is_not_pressed() {
        let listener = InputListener::new();
        let lease = Rc::new(());
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        listener.install(
            Action::Up,
            PressHandler::new(move || flag.set(true)).with_lease(&lease),
        );
        drop(lease);

        assert!(!listener.press(Action::Up));
        assert!(!fired.get());
    }

    #[test]
    fn test_press_name() {
        let listener = InputListener::new();
        listener.install(Action::Left, PressHandler::new(|| {}));

        assert_eq!(listener.press_name("left"), Ok(true));
        assert_eq!(listener.press_name("right"), Ok(false));
        assert!(listener.press_name("sideways").is_err());
    }
}
