//! Directional focus navigation for list and grid menus.
//!
//! A [`NavigationController`] keeps one element of an ordered selectable set
//! marked as selected and moves that marker in response to `up`, `down`,
//! `left`, `right` and `continue` presses delivered through an
//! [`InputListener`].
//!
//! # Topologies
//!
//! - **List**: every direction moves along one axis (up/left go back,
//!   down/right go forward).
//! - **Grid**: up/down stride by the column count, left/right move linearly.
//!
//! Both wrap around at the ends unless `loop_forbidden` is set.
//!
//! # Example
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//!
//! use focusnav_controller::{NavigationConfig, NavigationController, Selectable};
//! use focusnav_core::{Action, NavigationOptions};
//! use focusnav_input::InputListener;
//!
//! #[derive(Default)]
//! struct Button(Cell<bool>);
//!
//! impl Selectable for Button {
//!     fn set_selected(&self, selected: bool) {
//!         self.0.set(selected);
//!     }
//!     fn is_selected(&self) -> bool {
//!         self.0.get()
//!     }
//! }
//!
//! let buttons: Vec<Rc<Button>> = (0..3).map(|_| Rc::default()).collect();
//! let listener = InputListener::new();
//! let controller = NavigationController::new(
//!     NavigationConfig::new(NavigationOptions::list())
//!         .with_container(Rc::new(RefCell::new(buttons.clone())))
//!         .with_listener(listener.clone()),
//! );
//!
//! controller.mount();
//! listener.press(Action::Down);
//! assert_eq!(controller.selected_index(), 1);
//! assert!(buttons[1].is_selected());
//! assert!(!buttons[0].is_selected());
//!
//! controller.disable();
//! assert!(listener.bound_actions().is_empty());
//! ```

mod binder;
mod bridge;
mod config;
mod controller;
mod element;
mod observable;
mod source;

pub use binder::Bindings;
pub use config::{IndexCallback, NavigationConfig};
pub use controller::{NavigationController, NavigationHandle};
pub use element::{Container, Selectable};
pub use focusnav_input::InputListener;
pub use observable::{Observable, Subscription};
pub use source::{ElementSource, resolve};
