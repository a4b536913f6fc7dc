//! Unified widget driver.
//!
//! Write the verification logic once, run it against every frontend. The
//! trait below is the contract the hosting platform held with the widget —
//! forward button presses, read two display strings — so any frontend that
//! implements it can be checked against the same specification functions.

use crate::core::{BinaryOp, Button, UnaryOp};

/// Abstract driver for calculator interactions.
///
/// Implemented directly over the engine ([`EngineDriver`]) and through the
/// full terminal app ([`TuiDriver`], feature `tui`); the unified
/// `verify_*` functions in this module accept either, which keeps the
/// frontends from drifting apart from the engine.
pub trait WidgetDriver {
    /// Presses one keypad button
    fn press(&mut self, button: Button);

    /// Returns the primary display text
    fn display(&self) -> String;

    /// Returns the operation trace line
    fn secondary(&self) -> String;

    /// Resets the widget to its initial state
    fn reset(&mut self);
}

/// Driver talking straight to a [`CalculatorEngine`](crate::core::CalculatorEngine).
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: crate::core::CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &crate::core::CalculatorEngine {
        &self.engine
    }
}

impl WidgetDriver for EngineDriver {
    fn press(&mut self, button: Button) {
        self.engine.apply(button);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn secondary(&self) -> String {
        self.engine.secondary().to_string()
    }

    fn reset(&mut self) {
        self.engine.clear_all();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Button, WidgetDriver};
    use crate::tui::CalculatorApp;

    /// Driver going through the terminal application, keypad highlight and
    /// all, so the unified suite exercises the same path as a live session.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver over a fresh terminal app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl WidgetDriver for TuiDriver {
        fn press(&mut self, button: Button) {
            self.app.press(button);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn secondary(&self) -> String {
            self.app.secondary().to_string()
        }

        fn reset(&mut self) {
            self.app.press(Button::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// Presses a sequence of digit/point keys spelled as text.
fn enter_number<D: WidgetDriver>(driver: &mut D, text: &str) {
    for ch in text.chars() {
        match ch {
            '.' => driver.press(Button::Decimal),
            _ => driver.press(Button::Digit(ch.to_digit(10).unwrap_or(0) as u8)),
        }
    }
}

// ===== Unified Specification =====
// These checks work with ANY WidgetDriver implementation.

/// Verifies digit entry concatenation and leading-zero replacement.
pub fn verify_digit_entry<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.display(), "0");

    enter_number(driver, "407.25");
    assert_eq!(driver.display(), "407.25");

    driver.reset();
    enter_number(driver, "0");
    assert_eq!(driver.display(), "0");
    enter_number(driver, "9");
    assert_eq!(driver.display(), "9");
}

/// Verifies the four implemented binary operations end to end.
pub fn verify_binary_operations<D: WidgetDriver>(driver: &mut D) {
    let cases = [
        ("2", BinaryOp::Add, "3", "5"),
        ("10", BinaryOp::Subtract, "4", "6"),
        ("6", BinaryOp::Multiply, "7", "42"),
        ("20", BinaryOp::Divide, "8", "2.5"),
    ];
    for (first, op, second, expected) in cases {
        driver.reset();
        enter_number(driver, first);
        driver.press(Button::Operator(op));
        enter_number(driver, second);
        driver.press(Button::Equals);
        assert_eq!(driver.display(), expected);
        assert_eq!(
            driver.secondary(),
            format!("{first} {} {second} =", op.symbol())
        );
    }
}

/// Verifies the scientific functions against known values.
pub fn verify_unary_functions<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "16");
    driver.press(Button::Function(UnaryOp::Sqrt));
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.secondary(), "√(16)");

    driver.reset();
    enter_number(driver, "90");
    driver.press(Button::Function(UnaryOp::Sin));
    assert_eq!(driver.display(), "1");

    driver.reset();
    enter_number(driver, "1000");
    driver.press(Button::Function(UnaryOp::Log));
    assert_eq!(driver.display(), "3");

    driver.reset();
    driver.press(Button::Function(UnaryOp::Pi));
    assert_eq!(driver.display(), "3.141592653589793");
}

/// Verifies that a pending `%` makes equals a visible no-op.
pub fn verify_modulo_gap<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "7");
    driver.press(Button::Operator(BinaryOp::Modulo));
    enter_number(driver, "3");
    let display_before = driver.display();
    let secondary_before = driver.secondary();

    driver.press(Button::Equals);
    assert_eq!(driver.display(), display_before);
    assert_eq!(driver.secondary(), secondary_before);
}

/// Verifies unguarded division by zero lands as the Infinity sentinel.
pub fn verify_division_by_zero<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "1");
    driver.press(Button::Operator(BinaryOp::Divide));
    enter_number(driver, "0");
    driver.press(Button::Equals);
    assert_eq!(driver.display(), "Infinity");
}

/// Verifies backspace and clear behavior.
pub fn verify_backspace_and_clear<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "42");
    driver.press(Button::Backspace);
    assert_eq!(driver.display(), "4");
    driver.press(Button::Backspace);
    assert_eq!(driver.display(), "0");

    enter_number(driver, "5");
    driver.press(Button::Operator(BinaryOp::Add));
    driver.press(Button::Clear);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.secondary(), "");
}

/// Verifies the dead Ans control changes nothing.
pub fn verify_ans_dead_control<D: WidgetDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "12");
    driver.press(Button::Ans);
    assert_eq!(driver.display(), "12");
    assert_eq!(driver.secondary(), "");
}

/// Complete verification suite, run against any frontend.
pub fn run_full_specification<D: WidgetDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_binary_operations(driver);
    verify_unary_functions(driver);
    verify_modulo_gap(driver);
    verify_division_by_zero(driver);
    verify_backspace_and_clear(driver);
    verify_ans_dead_control(driver);
}
