//! Where the selectable set comes from.

use std::fmt;
use std::rc::Rc;

use crate::element::Container;
use crate::observable::Observable;

/// Source of the selectable elements.
pub enum ElementSource<E> {
    /// Direct children of a live container.
    Container(Rc<dyn Container<E>>),
    /// An explicit sequence whose absent entries are skipped.
    Elements(Observable<Vec<Option<E>>>),
}

impl<E> Clone for ElementSource<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Container(container) => Self::Container(Rc::clone(container)),
            Self::Elements(elements) => Self::Elements(elements.clone()),
        }
    }
}

impl<E> fmt::Debug for ElementSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container(_) => f.write_str("ElementSource::Container"),
            Self::Elements(_) => f.write_str("ElementSource::Elements"),
        }
    }
}

impl<E: Clone> ElementSource<E> {
    /// Current ordered working set.
    pub fn resolve(&self) -> Vec<E> {
        match self {
            Self::Container(container) => container.children(),
            Self::Elements(elements) => {
                elements.with(|elements| elements.iter().flatten().cloned().collect())
            }
        }
    }

    /// The observable sequence, for the explicit form.
    pub fn observable(&self) -> Option<&Observable<Vec<Option<E>>>> {
        match self {
            Self::Container(_) => None,
            Self::Elements(elements) => Some(elements),
        }
    }
}

/// Resolve an optional source; no source means an empty set.
pub fn resolve<E: Clone>(source: Option<&ElementSource<E>>) -> Vec<E> {
    source.map(ElementSource::resolve).unwrap_or_default()
}
