//! Terminal frontend for the calculator widget.
//!
//! Stands in for the platform renderer: draws the two display lines and the
//! keypad, forwards key presses and mouse clicks as [`Button`](crate::core::Button)
//! events, and owns no arithmetic state of its own.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonRole, Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUI};
