//! Event handling for the demo.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use focusnav_core::Action;

/// Key action that can be performed in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Deliver a press to the input listener.
    Press(Action),

    // Element set
    /// Append an element to the menu.
    AddItem,
    /// Drop the last element of the menu.
    RemoveItem,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Navigation - vim style
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Press(Action::Up),
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Press(Action::Down),
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::Press(Action::Left),
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::Press(Action::Right),

            // Navigation - arrow keys
            (KeyCode::Up, _) => KeyAction::Press(Action::Up),
            (KeyCode::Down, _) => KeyAction::Press(Action::Down),
            (KeyCode::Left, _) => KeyAction::Press(Action::Left),
            (KeyCode::Right, _) => KeyAction::Press(Action::Right),

            (KeyCode::Enter, _) => KeyAction::Press(Action::Continue),
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::Press(Action::Continue),

            (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::AddItem,
            (KeyCode::Char('+'), _) => KeyAction::AddItem,
            (KeyCode::Char('x'), KeyModifiers::NONE) => KeyAction::RemoveItem,
            (KeyCode::Char('-'), _) => KeyAction::RemoveItem,

            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "k ↑", description: "Move up" },
                KeyBinding { keys: "j ↓", description: "Move down" },
                KeyBinding { keys: "h ←", description: "Move left" },
                KeyBinding { keys: "l →", description: "Move right" },
                KeyBinding { keys: "Enter/Space", description: "Choose item" },
                KeyBinding { keys: "Click", description: "Select item" },
            ],
        },
        HelpSection {
            title: "Menu",
            bindings: vec![
                KeyBinding { keys: "a/+", description: "Add item" },
                KeyBinding { keys: "x/-", description: "Remove last item" },
            ],
        },
        HelpSection {
            title: "Commands",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q/Esc", description: "Quit" },
                KeyBinding { keys: "Ctrl-c", description: "Force quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_vim_keys_agree() {
        let pairs = [
            (KeyCode::Up, KeyCode::Char('k'), Action::Up),
            (KeyCode::Down, KeyCode::Char('j'), Action::Down),
            (KeyCode::Left, KeyCode::Char('h'), Action::Left),
            (KeyCode::Right, KeyCode::Char('l'), Action::Right),
        ];
        for (arrow, vim, action) in pairs {
            assert_eq!(KeyAction::from_key_event(key(arrow)), KeyAction::Press(action));
            assert_eq!(KeyAction::from_key_event(key(vim)), KeyAction::Press(action));
        }
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Enter)),
            KeyAction::Press(Action::Continue)
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char(' '))),
            KeyAction::Press(Action::Continue)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('c'))), KeyAction::None);
    }

    #[test]
    fn test_every_section_has_bindings() {
        let sections = get_help_sections();
        assert!(!sections.is_empty());
        assert!(sections.iter().all(|s| !s.bindings.is_empty()));
    }
}
