//! Controller configuration.

use std::fmt;
use std::rc::Rc;

use focusnav_core::NavigationOptions;
use focusnav_input::InputListener;

use crate::element::Container;
use crate::observable::Observable;
use crate::source::ElementSource;

/// Index callback shared with the controller.
pub type IndexCallback = Rc<dyn Fn(usize)>;

/// Everything a controller needs, fixed at construction.
pub struct NavigationConfig<E> {
    /// Topology, wraparound and suppression flags.
    pub options: NavigationOptions,
    /// Where selectables come from. `None` yields an empty set.
    pub source: Option<ElementSource<E>>,
    /// Registry to bind into. `None` makes the controller inert.
    pub listener: Option<InputListener>,
    /// Called after the selection moves to a new index.
    pub on_selected: Option<IndexCallback>,
    /// Called when the current selection is confirmed.
    pub on_chosen: Option<IndexCallback>,
}

impl<E> NavigationConfig<E> {
    /// Create a config with no source, listener or callbacks.
    pub fn new(options: NavigationOptions) -> Self {
        Self {
            options,
            source: None,
            listener: None,
            on_selected: None,
            on_chosen: None,
        }
    }

    /// Take selectables from a container's children.
    pub fn with_container<C: Container<E> + 'static>(mut self, container: Rc<C>) -> Self {
        self.source = Some(ElementSource::Container(container));
        self
    }

    /// Take selectables from an explicit sequence.
    pub fn with_elements(mut self, elements: Observable<Vec<Option<E>>>) -> Self {
        self.source = Some(ElementSource::Elements(elements));
        self
    }

    /// Bind into this listener's registry.
    pub fn with_listener(mut self, listener: InputListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Set the selection callback.
    pub fn on_selected(mut self, callback: impl Fn(usize) + 'static) -> Self {
        self.on_selected = Some(Rc::new(callback));
        self
    }

    /// Set the confirm callback.
    pub fn on_chosen(mut self, callback: impl Fn(usize) + 'static) -> Self {
        self.on_chosen = Some(Rc::new(callback));
        self
    }
}

impl<E> fmt::Debug for NavigationConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationConfig")
            .field("options", &self.options)
            .field("source", &self.source)
            .field("listener", &self.listener.is_some())
            .field("on_selected", &self.on_selected.is_some())
            .field("on_chosen", &self.on_chosen.is_some())
            .finish()
    }
}
