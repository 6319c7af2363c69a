//! Action registry and input listener for focusnav.
//!
//! An input backend (keyboard, gamepad, pointer) translates device events into
//! abstract [`Action`] presses. Components that want those presses install a
//! [`PressHandler`] into the slot for that action. A slot holds at most one
//! handler; installing a new one displaces the previous occupant.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use focusnav_core::Action;
//! use focusnav_input::{InputListener, PressHandler};
//!
//! let listener = InputListener::new();
//! let presses = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&presses);
//! listener.install(Action::Up, PressHandler::new(move || counter.set(counter.get() + 1)));
//!
//! assert!(listener.press(Action::Up));
//! assert!(!listener.press(Action::Down));
//! assert_eq!(presses.get(), 1);
//! ```

mod handler;
mod listener;
mod registry;

pub use focusnav_core::Action;
pub use handler::{HandlerId, PressHandler};
pub use listener::InputListener;
pub use registry::ActionRegistry;
