//! Terminal keyboard mapping.
//!
//! Maps crossterm key events onto keypad buttons. Only the keys that exist
//! on a plain keyboard are mapped; the scientific functions stay mouse-only,
//! exactly as they were touch-only on the shipped keypad.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{BinaryOp, Button};

/// Action derived from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(Button),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Button::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Press(Button::Digit(c.to_digit(10).unwrap_or(0) as u8))
            }
            KeyCode::Char('.') => KeyAction::Press(Button::Decimal),
            KeyCode::Char('+') => KeyAction::Press(Button::Operator(BinaryOp::Add)),
            KeyCode::Char('-') => KeyAction::Press(Button::Operator(BinaryOp::Subtract)),
            KeyCode::Char('*') => KeyAction::Press(Button::Operator(BinaryOp::Multiply)),
            KeyCode::Char('/') => KeyAction::Press(Button::Operator(BinaryOp::Divide)),
            KeyCode::Char('%') => KeyAction::Press(Button::Operator(BinaryOp::Modulo)),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(Button::Equals),
            KeyCode::Char('c' | 'C') | KeyCode::Esc => KeyAction::Press(Button::Clear),
            KeyCode::Backspace => KeyAction::Press(Button::Backspace),
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_digits_map_to_digit_buttons() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let action = handler.handle_key(key(KeyCode::Char(c)));
            let expected = c.to_digit(10).unwrap() as u8;
            assert_eq!(action, KeyAction::Press(Button::Digit(expected)));
        }
    }

    #[test]
    fn test_operators_map_to_trace_symbols() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+'))),
            KeyAction::Press(Button::Operator(BinaryOp::Add))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('-'))),
            KeyAction::Press(Button::Operator(BinaryOp::Subtract))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('*'))),
            KeyAction::Press(Button::Operator(BinaryOp::Multiply))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('/'))),
            KeyAction::Press(Button::Operator(BinaryOp::Divide))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('%'))),
            KeyAction::Press(Button::Operator(BinaryOp::Modulo))
        );
    }

    #[test]
    fn test_equals_from_enter_and_equals_sign() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Press(Button::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Press(Button::Equals)
        );
    }

    #[test]
    fn test_clear_from_escape_and_c() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Press(Button::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            KeyAction::Press(Button::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('C'))),
            KeyAction::Press(Button::Clear)
        );
    }

    #[test]
    fn test_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Press(Button::Backspace)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_l_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('l'))),
            KeyAction::Press(Button::Clear)
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('z'))), KeyAction::None);
    }

    #[test]
    fn test_function_keys_stay_mouse_only() {
        // 's' could plausibly mean sin; it deliberately does not
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('s'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('p'))), KeyAction::None);
    }
}
