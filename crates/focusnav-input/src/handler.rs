//! Press handler records.

use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an installed handler, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A handler occupying one action slot.
///
/// Cloning shares the callback and keeps the id. A handler tied to a lease
/// goes dead once every strong reference to the lease is dropped; dead
/// handlers are never pressed or restored.
#[derive(Clone)]
pub struct PressHandler {
    id: HandlerId,
    press: Rc<dyn Fn()>,
    lease: Option<Weak<()>>,
}

impl PressHandler {
    /// Create a handler with a fresh id.
    pub fn new(press: impl Fn() + 'static) -> Self {
        Self::with_id(HandlerId::next(), press)
    }

    /// Create a handler with a caller-chosen id.
    ///
    /// Several slots can share one id so an owner can recognise all of its
    /// handlers at once.
    pub fn with_id(id: HandlerId, press: impl Fn() + 'static) -> Self {
        Self {
            id,
            press: Rc::new(press),
            lease: None,
        }
    }

    /// Tie this handler's liveness to `lease`.
    pub fn with_lease(mut self, lease: &Rc<()>) -> Self {
        self.lease = Some(Rc::downgrade(lease));
        self
    }

    /// Check if the handler's owner still holds its lease.
    pub fn is_live(&self) -> bool {
        self.lease.as_ref().is_none_or(|lease| lease.strong_count() > 0)
    }

    /// Handler identity.
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Invoke the handler.
    pub fn press(&self) {
        (self.press)();
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHandler")
            .field("id", &self.id)
            .field("live", &self.is_live())
            .finish()
    }
}
