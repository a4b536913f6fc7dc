//! The calculator state machine.
//!
//! One engine instance backs one rendered widget. Every keypad press flows
//! through [`CalculatorEngine::apply`], mutates the state atomically, and
//! hands the renderer a fresh [`DisplayState`]. The engine performs no I/O
//! and has no failure modes: out-of-domain arithmetic degrades to the
//! `Infinity`/`NaN` display sentinels instead of erroring.

use serde::{Deserialize, Serialize};

use crate::core::format::{format_number, parse_operand};
use crate::core::{BinaryOp, Button, UnaryOp};

/// The two text lines the renderer draws after every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Primary numeric text; never empty, `"0"` when nothing is entered
    pub display: String,
    /// Cosmetic trace of the pending or just-completed operation
    pub secondary: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            secondary: String::new(),
        }
    }
}

impl DisplayState {
    /// Serializes the snapshot for a hosting runtime.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores a snapshot serialized with [`DisplayState::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A binary operator together with the operand captured when it was
/// selected. The pair only exists as a unit, so "operator set without a
/// first operand" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBinary {
    /// The display text captured at operator-selection time
    pub first: String,
    /// The selected operator
    pub op: BinaryOp,
}

/// The calculator engine: all widget state plus the event handlers.
///
/// Two logical modes: entering the first operand (`pending` absent) and
/// entering the second (`pending` present). `select_operator` moves 1 -> 2,
/// `compute_equals` moves 2 -> 1. There is no terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    state: DisplayState,
    pending: Option<PendingBinary>,
    /// When set, the next digit entry replaces the display instead of
    /// appending to it
    replace_next: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in the initial state (`display = "0"`, no pending
    /// operation).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DisplayState::default(),
            pending: None,
            replace_next: false,
        }
    }

    /// Returns the current renderer snapshot.
    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the primary display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Returns the operation trace line.
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.state.secondary
    }

    /// Returns the pending binary operation, if an operator is selected.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingBinary> {
        self.pending.as_ref()
    }

    /// Returns true when the next digit entry will replace the display.
    #[must_use]
    pub fn replaces_next_entry(&self) -> bool {
        self.replace_next
    }

    /// Dispatches one keypad press and returns the state to re-render.
    ///
    /// This is the widget's entire external interface: the hosting UI calls
    /// it once per button event and redraws from the returned snapshot.
    pub fn apply(&mut self, button: Button) -> &DisplayState {
        tracing::debug!(?button, "keypad press");
        match button {
            Button::Digit(_) | Button::Decimal => {
                if let Some(ch) = button.entry_char() {
                    self.enter_digit(ch);
                }
            }
            Button::Operator(op) => self.select_operator(op),
            Button::Equals => self.compute_equals(),
            Button::Function(op) => self.apply_unary(op),
            Button::Backspace => self.backspace(),
            Button::Clear => self.clear_all(),
            // Wired on the shipped keypad, deliberately does nothing
            Button::Ans => {}
        }
        &self.state
    }

    /// Appends a digit or decimal point to the display.
    ///
    /// A display of exactly `"0"` is replaced, not prefixed. No decimal-point
    /// validation is performed: a second `.` is appended verbatim, a quirk
    /// the shipped widget has and this engine preserves.
    pub fn enter_digit(&mut self, ch: char) {
        debug_assert!(
            ch.is_ascii_digit() || ch == '.',
            "entry outside the keypad alphabet"
        );
        if self.replace_next {
            self.state.display = ch.to_string();
            self.replace_next = false;
        } else if self.state.display == "0" {
            self.state.display = ch.to_string();
        } else {
            self.state.display.push(ch);
        }
    }

    /// Captures the display as the first operand of `op`.
    ///
    /// Always succeeds; a previously pending operator is discarded and the
    /// calculation restarts from the current display (no chaining).
    pub fn select_operator(&mut self, op: BinaryOp) {
        self.state.secondary = format!("{} {}", self.state.display, op.symbol());
        self.pending = Some(PendingBinary {
            first: self.state.display.clone(),
            op,
        });
        self.replace_next = true;
    }

    /// Resolves the pending binary operation against the current display.
    ///
    /// No-op when nothing is pending, and equally a no-op when the pending
    /// operator is `%`: the shipped widget's result switch has no `%` arm,
    /// so the pending trace stays on screen untouched. Division by zero is
    /// not guarded and lands as `Infinity`/`NaN` in the display.
    pub fn compute_equals(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let first = parse_operand(&pending.first);
        let second = parse_operand(&self.state.display);
        let Some(result) = pending.op.evaluate(first, second) else {
            return;
        };
        self.state.secondary = format!(
            "{} {} {} =",
            pending.first,
            pending.op.symbol(),
            self.state.display
        );
        self.state.display = format_number(result);
        self.pending = None;
        self.replace_next = true;
    }

    /// Applies a scientific function to the display value.
    ///
    /// A pending binary operation is left untouched, so a function can be
    /// applied mid-expression and equals later consumes the new display as
    /// the second operand.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        let result = op.evaluate(parse_operand(&self.state.display));
        self.state.secondary = format!("{}({})", op.symbol(), self.state.display);
        self.state.display = format_number(result);
        self.replace_next = true;
    }

    /// Drops the last display character, bottoming out at `"0"`.
    ///
    /// Never touches the pending operation or the replace flag.
    pub fn backspace(&mut self) {
        if self.state.display.len() > 1 {
            self.state.display.pop();
        } else {
            self.state.display = "0".to_string();
        }
    }

    /// Resets every field to its initial default.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(engine: &mut CalculatorEngine, buttons: &[Button]) {
        for &button in buttons {
            engine.apply(button);
        }
    }

    // ===== Initial state tests =====

    #[test]
    fn test_new_defaults() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.secondary(), "");
        assert!(engine.pending().is_none());
        assert!(!engine.replaces_next_entry());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorEngine::default(), CalculatorEngine::new());
    }

    // ===== Digit entry tests =====

    #[test]
    fn test_enter_digit_replaces_leading_zero() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('7');
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_enter_digit_appends() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('4');
        engine.enter_digit('2');
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_enter_zero_on_zero_stays_single() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('0');
        assert_eq!(engine.display(), "0");
        engine.enter_digit('0');
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_decimal_replaces_lone_zero() {
        // the shipped widget swaps "0" for "." rather than producing "0."
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('.');
        assert_eq!(engine.display(), ".");
    }

    #[test]
    fn test_second_decimal_point_appended_verbatim() {
        let mut engine = CalculatorEngine::new();
        for ch in ['1', '.', '5', '.', '2'] {
            engine.enter_digit(ch);
        }
        assert_eq!(engine.display(), "1.5.2");
    }

    #[test]
    fn test_replace_next_consumes_one_entry() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('9');
        engine.select_operator(BinaryOp::Add);
        assert!(engine.replaces_next_entry());
        engine.enter_digit('3');
        assert_eq!(engine.display(), "3");
        assert!(!engine.replaces_next_entry());
        engine.enter_digit('1');
        assert_eq!(engine.display(), "31");
    }

    // ===== Operator selection tests =====

    #[test]
    fn test_select_operator_captures_display() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('5');
        engine.select_operator(BinaryOp::Multiply);
        let pending = engine.pending().unwrap();
        assert_eq!(pending.first, "5");
        assert_eq!(pending.op, BinaryOp::Multiply);
        assert_eq!(engine.secondary(), "5 *");
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_second_operator_discards_first() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('8');
        engine.select_operator(BinaryOp::Add);
        engine.select_operator(BinaryOp::Divide);
        let pending = engine.pending().unwrap();
        assert_eq!(pending.op, BinaryOp::Divide);
        assert_eq!(pending.first, "8");
        assert_eq!(engine.secondary(), "8 /");
    }

    // ===== Equals tests =====

    #[test]
    fn test_equals_addition() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(2),
                Button::Operator(BinaryOp::Add),
                Button::Digit(3),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.secondary(), "2 + 3 =");
        assert!(engine.pending().is_none());
        assert!(engine.replaces_next_entry());
    }

    #[test]
    fn test_equals_subtraction_negative_result() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(3),
                Button::Operator(BinaryOp::Subtract),
                Button::Digit(5),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "-2");
    }

    #[test]
    fn test_equals_multiplication_fractional() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(2),
                Button::Decimal,
                Button::Digit(5),
                Button::Operator(BinaryOp::Multiply),
                Button::Digit(4),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "10");
        assert_eq!(engine.secondary(), "2.5 * 4 =");
    }

    #[test]
    fn test_equals_division_by_zero_shows_infinity() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(1),
                Button::Operator(BinaryOp::Divide),
                Button::Digit(0),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "Infinity");
        assert_eq!(engine.secondary(), "1 / 0 =");
    }

    #[test]
    fn test_equals_zero_by_zero_shows_nan() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(0),
                Button::Operator(BinaryOp::Divide),
                Button::Digit(0),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "NaN");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('7');
        let before = engine.clone();
        engine.compute_equals();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_equals_with_pending_modulo_is_noop() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(7),
                Button::Operator(BinaryOp::Modulo),
                Button::Digit(3),
            ],
        );
        let before = engine.clone();
        engine.compute_equals();
        assert_eq!(engine, before);
        assert_eq!(engine.display(), "3");
        assert_eq!(engine.secondary(), "7 %");
        assert!(engine.pending().is_some());
    }

    #[test]
    fn test_result_feeds_next_calculation() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(6),
                Button::Operator(BinaryOp::Multiply),
                Button::Digit(7),
                Button::Equals,
                Button::Operator(BinaryOp::Subtract),
                Button::Digit(2),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "40");
        assert_eq!(engine.secondary(), "42 - 2 =");
    }

    #[test]
    fn test_infinity_result_parses_as_next_operand() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(1),
                Button::Operator(BinaryOp::Divide),
                Button::Digit(0),
                Button::Equals,
                Button::Operator(BinaryOp::Add),
                Button::Digit(1),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "Infinity");
    }

    // ===== Unary function tests =====

    #[test]
    fn test_sqrt() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(1), Button::Digit(6)]);
        engine.apply_unary(UnaryOp::Sqrt);
        assert_eq!(engine.display(), "4");
        assert_eq!(engine.secondary(), "√(16)");
    }

    #[test]
    fn test_sqrt_negative_shows_nan() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(0),
                Button::Operator(BinaryOp::Subtract),
                Button::Digit(4),
                Button::Equals,
            ],
        );
        assert_eq!(engine.display(), "-4");
        engine.apply_unary(UnaryOp::Sqrt);
        assert_eq!(engine.display(), "NaN");
    }

    #[test]
    fn test_sin_of_90_degrees() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(9), Button::Digit(0)]);
        engine.apply_unary(UnaryOp::Sin);
        assert_eq!(engine.display(), "1");
        assert_eq!(engine.secondary(), "sin(90)");
    }

    #[test]
    fn test_log_of_100() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(1), Button::Digit(0), Button::Digit(0)]);
        engine.apply_unary(UnaryOp::Log);
        assert_eq!(engine.display(), "2");
    }

    #[test]
    fn test_squared() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('9');
        engine.apply_unary(UnaryOp::Squared);
        assert_eq!(engine.display(), "81");
        assert_eq!(engine.secondary(), "x²(9)");
    }

    #[test]
    fn test_pi_ignores_display() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(4), Button::Digit(2)]);
        engine.apply_unary(UnaryOp::Pi);
        assert_eq!(engine.display(), "3.141592653589793");
        assert_eq!(engine.secondary(), "π(42)");
    }

    #[test]
    fn test_unary_replaces_next_entry() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('4');
        engine.apply_unary(UnaryOp::Squared);
        engine.enter_digit('7');
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_unary_preserves_pending_binary() {
        // 2 + sqrt(16) = -> 6
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(2),
                Button::Operator(BinaryOp::Add),
                Button::Digit(1),
                Button::Digit(6),
                Button::Function(UnaryOp::Sqrt),
            ],
        );
        assert!(engine.pending().is_some());
        assert_eq!(engine.display(), "4");
        engine.compute_equals();
        assert_eq!(engine.display(), "6");
        assert_eq!(engine.secondary(), "2 + 4 =");
    }

    // ===== Backspace tests =====

    #[test]
    fn test_backspace_drops_last_char() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(4), Button::Digit(2)]);
        engine.backspace();
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn test_backspace_single_char_bottoms_at_zero() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit('5');
        engine.backspace();
        assert_eq!(engine.display(), "0");
        engine.backspace();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_backspace_leaves_pending_untouched() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(5),
                Button::Operator(BinaryOp::Add),
                Button::Digit(1),
                Button::Digit(2),
            ],
        );
        engine.backspace();
        assert_eq!(engine.display(), "1");
        assert!(engine.pending().is_some());
        engine.compute_equals();
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn test_backspace_does_not_touch_replace_flag() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(5), Button::Operator(BinaryOp::Add)]);
        engine.backspace();
        assert!(engine.replaces_next_entry());
    }

    // ===== Clear tests =====

    #[test]
    fn test_clear_all_restores_defaults() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[
                Button::Digit(9),
                Button::Operator(BinaryOp::Divide),
                Button::Digit(3),
                Button::Function(UnaryOp::Sin),
            ],
        );
        engine.clear_all();
        assert_eq!(engine, CalculatorEngine::new());
    }

    // ===== Dispatch tests =====

    #[test]
    fn test_apply_returns_fresh_snapshot() {
        let mut engine = CalculatorEngine::new();
        let state = engine.apply(Button::Digit(8));
        assert_eq!(state.display, "8");
    }

    #[test]
    fn test_ans_is_a_noop() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &[Button::Digit(1), Button::Operator(BinaryOp::Add)]);
        let before = engine.clone();
        engine.apply(Button::Ans);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_every_button_keeps_display_non_empty() {
        for button in Button::ALL {
            let mut engine = CalculatorEngine::new();
            engine.apply(button);
            assert!(!engine.display().is_empty(), "{button:?} emptied the display");
        }
    }

    // ===== DisplayState tests =====

    #[test]
    fn test_display_state_default() {
        let state = DisplayState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.secondary, "");
    }

    #[test]
    fn test_display_state_json_round_trip() {
        let mut engine = CalculatorEngine::new();
        press_all(
            &mut engine,
            &[Button::Digit(7), Button::Operator(BinaryOp::Multiply)],
        );
        let json = engine.state().to_json().unwrap();
        let restored = DisplayState::from_json(&json).unwrap();
        assert_eq!(&restored, engine.state());
    }
}
