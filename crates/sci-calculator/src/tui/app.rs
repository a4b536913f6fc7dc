//! Terminal application state.
//!
//! One engine, one keypad, one quit flag. The app is the renderer-side
//! collaborator the platform used to be: it forwards button presses and
//! redraws from the engine's snapshot, owning no arithmetic state itself.

use ratatui::layout::Rect;

use crate::core::{Button, CalculatorEngine, DisplayState};
use crate::tui::keypad::Keypad;

/// Calculator application state for the terminal frontend.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app with a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the primary display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns the operation trace line.
    #[must_use]
    pub fn secondary(&self) -> &str {
        self.engine.secondary()
    }

    /// Returns the renderer snapshot.
    #[must_use]
    pub fn state(&self) -> &DisplayState {
        self.engine.state()
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards one button press to the engine and highlights its key.
    pub fn press(&mut self, button: Button) -> &DisplayState {
        self.keypad.highlight(button);
        self.engine.apply(button)
    }

    /// Routes a mouse click inside the keypad area to a button press.
    ///
    /// Returns the pressed button, or `None` when the click missed every key.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Button> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        let button = self.keypad.get(index)?.button;
        self.press(button);
        Some(button)
    }
}
