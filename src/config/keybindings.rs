//! Keyboard bindings configuration.

use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// What the user wants the list to do, independent of which key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll up by one step. Default: k/↑
    ScrollUp,
    /// Scroll down by one step. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first item. Default: g/Home
    ScrollToTop,
    /// Jump to the last page. Default: G/End
    ScrollToBottom,
    /// Forget measured heights and rebuild from estimates. Default: r
    ResetHeights,
    /// Exit. Default: q/Esc
    Quit,
}

/// Maps keyboard events to list actions.
///
/// Provides default vim-style bindings alongside arrow/page keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::ScrollToBottom,
        );

        // Arrow and Home/End
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::ScrollToBottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Height cache
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::ResetHeights,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
