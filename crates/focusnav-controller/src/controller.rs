//! The navigation controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use focusnav_core::{Action, Cursor, Direction, NavigationOptions};
use focusnav_input::InputListener;

use crate::binder::{Binding, Bindings};
use crate::config::{IndexCallback, NavigationConfig};
use crate::element::Selectable;
use crate::observable::Subscription;
use crate::source::{self, ElementSource};

/// Live selection state.
pub(crate) struct SelectionState<E> {
    pub(crate) selected_index: usize,
    pub(crate) selectables: Vec<E>,
    pub(crate) binding: Option<Binding>,
    pub(crate) subscription: Option<Subscription>,
}

/// State shared between the controller and the handlers it installs.
///
/// Handlers hold a `Weak` to this, so dropping the controller makes any
/// handler left behind in a registry inert.
pub(crate) struct Shared<E> {
    pub(crate) options: NavigationOptions,
    pub(crate) source: Option<ElementSource<E>>,
    pub(crate) listener: InputListener,
    on_selected: Option<IndexCallback>,
    on_chosen: Option<IndexCallback>,
    pub(crate) state: RefCell<SelectionState<E>>,
}

impl<E: Selectable + Clone + 'static> Shared<E> {
    pub(crate) fn refresh(&self) {
        let selectables = source::resolve(self.source.as_ref());
        self.state.borrow_mut().selectables = selectables;
    }

    fn cursor(&self) -> Cursor {
        let state = self.state.borrow();
        Cursor::new(state.selected_index, state.selectables.len())
            .with_loop_forbidden(self.options.loop_forbidden)
    }

    pub(crate) fn select(&self, index: usize) -> bool {
        let (previous, current) = {
            let mut state = self.state.borrow_mut();
            let Some(current) = state.selectables.get(index).cloned() else {
                return false;
            };
            // Clear using the old index before overwriting it. The element may
            // be gone if the set shrank since it was selected.
            let previous = state.selectables.get(state.selected_index).cloned();
            state.selected_index = index;
            (previous, current)
        };

        if let Some(previous) = previous {
            previous.set_selected(false);
        }
        current.set_selected(true);
        tracing::trace!(target: "focusnav", index, "selected");

        if let Some(on_selected) = &self.on_selected {
            on_selected(index);
        }
        true
    }

    /// Select a movement candidate. `None` (blocked at a boundary) selects
    /// nothing; a wrap back onto the current index still re-selects it.
    fn move_to(&self, candidate: Option<usize>) -> bool {
        candidate.is_some_and(|index| self.select(index))
    }

    pub(crate) fn select_previous(&self) -> bool {
        self.move_to(self.cursor().previous())
    }

    pub(crate) fn select_next(&self) -> bool {
        self.move_to(self.cursor().next())
    }

    pub(crate) fn select_up(&self) -> bool {
        let columns = self.options.topology.columns().unwrap_or(1);
        self.move_to(self.cursor().up(columns))
    }

    pub(crate) fn select_down(&self) -> bool {
        let columns = self.options.topology.columns().unwrap_or(1);
        self.move_to(self.cursor().down(columns))
    }

    pub(crate) fn press(&self, direction: Direction) -> bool {
        self.move_to(self.cursor().step(self.options.topology, direction))
    }

    pub(crate) fn confirm(&self) -> bool {
        let index = {
            let state = self.state.borrow();
            if state.selected_index >= state.selectables.len() {
                return false;
            }
            state.selected_index
        };
        tracing::trace!(target: "focusnav", index, "chosen");
        if let Some(on_chosen) = &self.on_chosen {
            on_chosen(index);
        }
        true
    }

    pub(crate) fn handle(&self, action: Action) {
        match action.direction() {
            Some(direction) => {
                self.press(direction);
            }
            None => {
                self.confirm();
            }
        }
    }

    pub(crate) fn selected_index(&self) -> usize {
        self.state.borrow().selected_index
    }

    pub(crate) fn selected_element(&self) -> Option<E> {
        let state = self.state.borrow();
        state.selectables.get(state.selected_index).cloned()
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.state.borrow().binding.is_some()
    }
}

/// Maps directional input and confirm presses onto a selection index.
///
/// The controller starts unbound. [`mount`](Self::mount) resolves the
/// selectables, installs handlers into the listener and selects the first
/// element; [`disable`](Self::disable) hands the registry slots back. Dropping
/// a mounted controller disables it.
///
/// Without a listener the controller is inert: every operation is a no-op and
/// every accessor reports an empty selection.
pub struct NavigationController<E: Selectable + Clone + 'static> {
    shared: Option<Rc<Shared<E>>>,
}

impl<E: Selectable + Clone + 'static> NavigationController<E> {
    /// Create an unbound controller.
    pub fn new(config: NavigationConfig<E>) -> Self {
        let NavigationConfig {
            options,
            source,
            listener,
            on_selected,
            on_chosen,
        } = config;

        let Some(listener) = listener else {
            tracing::warn!(target: "focusnav", "No input listener provided for navigation");
            return Self { shared: None };
        };

        let shared = Rc::new(Shared {
            options,
            source,
            listener,
            on_selected,
            on_chosen,
            state: RefCell::new(SelectionState {
                selected_index: 0,
                selectables: Vec::new(),
                binding: None,
                subscription: None,
            }),
        });
        shared.observe();

        Self {
            shared: Some(shared),
        }
    }

    /// Bind into the listener and select the first element.
    ///
    /// Returns the actions this instance installed, or `None` when inert.
    /// Mounting an already mounted controller rebinds it.
    pub fn mount(&self) -> Option<Bindings> {
        let shared = self.shared.as_ref()?;
        if shared.is_bound() {
            shared.unbind();
        }
        shared.refresh();
        let bindings = shared.bind();
        shared.select(0);
        Some(bindings)
    }

    /// Hand back every slot this instance still owns.
    ///
    /// Selection state is kept for a later [`mount`](Self::mount), and an
    /// explicit element sequence keeps being tracked until the controller is
    /// dropped.
    pub fn disable(&self) {
        if let Some(shared) = &self.shared {
            shared.unbind();
        }
    }

    /// Move the selection to `index`. Out-of-range indices are ignored.
    pub fn select(&self, index: usize) -> bool {
        self.shared.as_ref().is_some_and(|s| s.select(index))
    }

    /// Directional input "up".
    pub fn up(&self) -> bool {
        self.press(Direction::Up)
    }

    /// Directional input "down".
    pub fn down(&self) -> bool {
        self.press(Direction::Down)
    }

    /// Directional input "left".
    pub fn left(&self) -> bool {
        self.press(Direction::Left)
    }

    /// Directional input "right".
    pub fn right(&self) -> bool {
        self.press(Direction::Right)
    }

    /// Directional input dispatched by topology.
    pub fn press(&self, direction: Direction) -> bool {
        self.shared.as_ref().is_some_and(|s| s.press(direction))
    }

    /// Confirm the current selection.
    pub fn confirm(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.confirm())
    }

    /// One step back along the linear order.
    pub fn select_previous(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.select_previous())
    }

    /// One step forward along the linear order.
    pub fn select_next(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.select_next())
    }

    /// One row up; a list behaves as a single column.
    pub fn select_up(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.select_up())
    }

    /// One row down; a list behaves as a single column.
    pub fn select_down(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.select_down())
    }

    /// Re-read the selectable set from the source.
    ///
    /// Container sources have no change notification, so owners call this
    /// after changing the container's children. The index is not touched.
    pub fn refresh(&self) {
        if let Some(shared) = &self.shared {
            shared.refresh();
        }
    }

    /// Currently selected index.
    pub fn selected_index(&self) -> usize {
        self.shared.as_ref().map_or(0, |s| s.selected_index())
    }

    /// Element at the selected index, if it exists.
    pub fn selected_element(&self) -> Option<E> {
        self.shared.as_ref()?.selected_element()
    }

    /// Column of the selected index (0 for lists).
    pub fn current_column(&self) -> usize {
        self.shared.as_ref().map_or(0, |s| {
            s.options.topology.column_of(s.selected_index())
        })
    }

    /// Current selectable set.
    pub fn selectables(&self) -> Vec<E> {
        self.shared
            .as_ref()
            .map(|s| s.state.borrow().selectables.clone())
            .unwrap_or_default()
    }

    /// Number of selectables.
    pub fn len(&self) -> usize {
        self.shared
            .as_ref()
            .map_or(0, |s| s.state.borrow().selectables.len())
    }

    /// Check if there is nothing to navigate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if handlers are installed.
    pub fn is_bound(&self) -> bool {
        self.shared.as_ref().is_some_and(|s| s.is_bound())
    }

    /// Check if the controller was built without a listener.
    pub fn is_inert(&self) -> bool {
        self.shared.is_none()
    }

    /// Navigation options, unless inert.
    pub fn options(&self) -> Option<&NavigationOptions> {
        self.shared.as_ref().map(|s| &s.options)
    }

    /// A weak handle for driving this controller from callbacks.
    pub fn handle(&self) -> NavigationHandle<E> {
        NavigationHandle {
            shared: self
                .shared
                .as_ref()
                .map_or_else(Weak::new, Rc::downgrade),
        }
    }
}

impl<E: Selectable + Clone + 'static> Drop for NavigationController<E> {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Weak handle to a controller.
///
/// Useful inside `on_selected`/`on_chosen` callbacks, which are created before
/// the controller exists. Every operation is a no-op once the controller is
/// dropped.
pub struct NavigationHandle<E> {
    shared: Weak<Shared<E>>,
}

impl<E> Clone for NavigationHandle<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<E: Selectable + Clone + 'static> NavigationHandle<E> {
    /// See [`NavigationController::select`].
    pub fn select(&self, index: usize) -> bool {
        self.shared.upgrade().is_some_and(|s| s.select(index))
    }

    /// See [`NavigationController::press`].
    pub fn press(&self, direction: Direction) -> bool {
        self.shared.upgrade().is_some_and(|s| s.press(direction))
    }

    /// See [`NavigationController::confirm`].
    pub fn confirm(&self) -> bool {
        self.shared.upgrade().is_some_and(|s| s.confirm())
    }

    /// See [`NavigationController::disable`].
    pub fn disable(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.unbind();
        }
    }

    /// See [`NavigationController::selected_index`].
    pub fn selected_index(&self) -> Option<usize> {
        self.shared.upgrade().map(|s| s.selected_index())
    }

    /// Check if the controller is still alive.
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }
}
