//! Keyboard dispatch table for an active select widget

use iocraft::prelude::KeyCode;

/// What a key press means to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Open the menu, or move the highlight up
    MoveUp,
    /// Open the menu, or move the highlight down
    MoveDown,
    /// Choose the highlighted option
    Confirm,
    /// Close the menu
    Dismiss,
    /// Choose the highlighted option, or let focus move on
    Tab,
}

/// How the host should treat the key event after the widget saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The widget did not handle the key
    Ignored,
    /// Handled; the host's default behavior still applies
    Handled,
    /// Handled; the host must suppress its default (e.g. focus change on Tab)
    PreventDefault,
}

/// Convert a key code to a KeyIntent (pure function)
///
/// Modifiers are not consulted: Shift+Tab arrives as `BackTab` and is treated
/// the same as Tab.
pub fn key_to_intent(code: KeyCode) -> Option<KeyIntent> {
    match code {
        KeyCode::Up => Some(KeyIntent::MoveUp),
        KeyCode::Down => Some(KeyIntent::MoveDown),
        KeyCode::Enter => Some(KeyIntent::Confirm),
        KeyCode::Esc => Some(KeyIntent::Dismiss),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyIntent::Tab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_intent_navigation() {
        assert_eq!(key_to_intent(KeyCode::Up), Some(KeyIntent::MoveUp));
        assert_eq!(key_to_intent(KeyCode::Down), Some(KeyIntent::MoveDown));
    }

    #[test]
    fn test_key_to_intent_actions() {
        assert_eq!(key_to_intent(KeyCode::Enter), Some(KeyIntent::Confirm));
        assert_eq!(key_to_intent(KeyCode::Esc), Some(KeyIntent::Dismiss));
        assert_eq!(key_to_intent(KeyCode::Tab), Some(KeyIntent::Tab));
        assert_eq!(key_to_intent(KeyCode::BackTab), Some(KeyIntent::Tab));
    }

    #[test]
    fn test_key_to_intent_unmapped() {
        assert_eq!(key_to_intent(KeyCode::Char('j')), None);
        assert_eq!(key_to_intent(KeyCode::Left), None);
        assert_eq!(key_to_intent(KeyCode::PageDown), None);
    }
}
