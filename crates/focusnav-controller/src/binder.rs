//! Installing and releasing action handlers.
//!
//! Every handler a controller installs during one mount shares a single
//! [`HandlerId`] and a lease. On release, a slot is only touched if that id
//! still occupies it, and the handler displaced at install time is put back
//! if its own owner is still bound. Two controllers sharing a registry
//! therefore cannot tear down each other's bindings, in either order.

use std::rc::{Rc, Weak};

use focusnav_core::Action;
use focusnav_input::{HandlerId, PressHandler};

use crate::controller::Shared;
use crate::element::Selectable;

/// Record of one mount's installed slots.
pub(crate) struct Binding {
    owner: HandlerId,
    lease: Rc<()>,
    installed: Vec<(Action, Option<PressHandler>)>,
}

/// Actions installed by a [`mount`](crate::NavigationController::mount).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    owner: HandlerId,
    actions: Vec<Action>,
}

impl Bindings {
    /// Id shared by every handler of this mount.
    pub fn owner(&self) -> HandlerId {
        self.owner
    }

    /// Installed actions, in installation order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Check if an action was installed.
    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

impl<E: Selectable + Clone + 'static> Shared<E> {
    pub(crate) fn bind(self: &Rc<Self>) -> Bindings {
        let owner = HandlerId::next();
        let lease = Rc::new(());
        let actions = self.options.bound_actions();

        let installed: Vec<_> = actions
            .iter()
            .map(|&action| {
                let weak: Weak<Self> = Rc::downgrade(self);
                let handler = PressHandler::with_id(owner, move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle(action);
                    }
                })
                .with_lease(&lease);
                (action, self.listener.install(action, handler))
            })
            .collect();

        tracing::debug!(target: "focusnav", owner = %owner, ?actions, "bound");
        self.state.borrow_mut().binding = Some(Binding {
            owner,
            lease,
            installed,
        });

        Bindings { owner, actions }
    }

    /// Release this instance's slots. Returns false when nothing was bound.
    pub(crate) fn unbind(&self) -> bool {
        let Some(binding) = self.state.borrow_mut().binding.take() else {
            return false;
        };

        let Binding {
            owner,
            lease,
            installed,
        } = binding;
        drop(lease);

        let mut released = 0;
        for (action, previous) in installed.into_iter().rev() {
            if self.listener.release(action, owner, previous) {
                released += 1;
            }
        }
        tracing::debug!(target: "focusnav", owner = %owner, released, "unbound");
        true
    }
}
