//! Action slot registry.

use indexmap::IndexMap;

use focusnav_core::Action;

use crate::handler::{HandlerId, PressHandler};

/// Mapping from action to the handler currently occupying its slot.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    slots: IndexMap<Action, PressHandler>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler, returning the one it displaced.
    pub fn install(&mut self, action: Action, handler: PressHandler) -> Option<PressHandler> {
        self.slots.insert(action, handler)
    }

    /// Empty a slot, returning its handler.
    pub fn remove(&mut self, action: Action) -> Option<PressHandler> {
        self.slots.shift_remove(&action)
    }

    /// Hand a slot back if `owner` still occupies it.
    ///
    /// The slot is refilled with `previous` if that handler is still live, and
    /// emptied otherwise. Returns false and leaves the slot alone when another
    /// handler has taken it over.
    pub fn release(
        &mut self,
        action: Action,
        owner: HandlerId,
        previous: Option<PressHandler>,
    ) -> bool {
        if self.handler_id(action) != Some(owner) {
            return false;
        }
        match previous.filter(PressHandler::is_live) {
            Some(handler) => {
                self.slots.insert(action, handler);
            }
            None => {
                self.slots.shift_remove(&action);
            }
        }
        true
    }

    /// Handler occupying a slot.
    pub fn get(&self, action: Action) -> Option<&PressHandler> {
        self.slots.get(&action)
    }

    /// Id of the handler occupying a slot.
    pub fn handler_id(&self, action: Action) -> Option<HandlerId> {
        self.get(action).map(PressHandler::id)
    }

    /// Check if a slot is occupied.
    pub fn contains(&self, action: Action) -> bool {
        self.slots.contains_key(&action)
    }

    /// Occupied slots, in installation order.
    pub fn bound_actions(&self) -> Vec<Action> {
        self.slots.keys().copied().collect()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
