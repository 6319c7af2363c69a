//! Headless replay of action scripts.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use focusnav_controller::{InputListener, NavigationConfig, NavigationController, Selectable};
use focusnav_core::{Action, NavigationOptions, ParseActionError};

/// Element with nothing but a selection marker.
#[derive(Debug, Default)]
struct Slot(Cell<bool>);

impl Selectable for Slot {
    fn set_selected(&self, selected: bool) {
        self.0.set(selected);
    }

    fn is_selected(&self) -> bool {
        self.0.get()
    }
}

/// Controller state after one scripted press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub action: Action,
    pub index: usize,
    pub column: usize,
    /// A handler occupied the action's slot.
    pub handled: bool,
    /// The press fired the chosen callback.
    pub chosen: bool,
}

impl fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {:<8}  index {:<3} column {}",
            self.step,
            self.action.as_ref(),
            self.index,
            self.column
        )?;
        if !self.handled {
            f.write_str("  (unbound)")?;
        }
        if self.chosen {
            f.write_str("  chosen")?;
        }
        Ok(())
    }
}

/// Parse a comma or whitespace separated list of action names.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ParseActionError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(Action::parse)
        .collect()
}

/// Mount a controller over `count` headless elements and press each action.
pub fn replay(count: usize, options: NavigationOptions, script: &[Action]) -> Vec<ReplayStep> {
    let slots: Vec<Rc<Slot>> = (0..count).map(|_| Rc::default()).collect();
    let listener = InputListener::new();
    let chosen = Rc::new(Cell::new(false));
    let on_chosen = Rc::clone(&chosen);

    let controller = NavigationController::new(
        NavigationConfig::new(options)
            .with_container(Rc::new(RefCell::new(slots)))
            .with_listener(listener.clone())
            .on_chosen(move |_| on_chosen.set(true)),
    );
    controller.mount();

    script
        .iter()
        .enumerate()
        .map(|(step, &action)| {
            let handled = listener.press(action);
            ReplayStep {
                step: step + 1,
                action,
                index: controller.selected_index(),
                column: controller.current_column(),
                handled,
                chosen: chosen.replace(false),
            }
        })
        .collect()
}
