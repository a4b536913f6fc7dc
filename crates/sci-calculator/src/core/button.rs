//! The keypad's input vocabulary.
//!
//! Every control on the widget is one [`Button`] variant; the hosting UI
//! forwards exactly these events and nothing else, so the engine's entire
//! input surface is enumerable.

use serde::{Deserialize, Serialize};

use crate::core::{BinaryOp, UnaryOp, WidgetError, WidgetResult};

/// A single keypad press, the only event kind the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key
    Operator(BinaryOp),
    /// The equals key
    Equals,
    /// The AC (all clear) key
    Clear,
    /// The backspace key
    Backspace,
    /// A scientific function key
    Function(UnaryOp),
    /// The Ans key — wired on the shipped keypad but performs no action
    Ans,
}

impl Button {
    /// Every distinct control on the widget, in keypad reading order.
    pub const ALL: [Self; 27] = [
        Self::Clear,
        Self::Backspace,
        Self::Function(UnaryOp::Pi),
        Self::Operator(BinaryOp::Divide),
        Self::Function(UnaryOp::Sin),
        Self::Function(UnaryOp::Cos),
        Self::Function(UnaryOp::Tan),
        Self::Operator(BinaryOp::Multiply),
        Self::Function(UnaryOp::Sqrt),
        Self::Function(UnaryOp::Squared),
        Self::Function(UnaryOp::Log),
        Self::Operator(BinaryOp::Subtract),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Operator(BinaryOp::Add),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Equals,
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Operator(BinaryOp::Modulo),
        Self::Digit(0),
        Self::Decimal,
        Self::Ans,
    ];

    /// Returns the keycap text printed on the button.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.keycap().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "\u{232b}".to_string(),
            Self::Function(op) => op.symbol().to_string(),
            Self::Ans => "Ans".to_string(),
        }
    }

    /// Resolves a keycap label back to its button.
    ///
    /// This is the seam a hosting runtime uses when it forwards presses by
    /// control identifier rather than as typed events.
    pub fn from_label(label: &str) -> WidgetResult<Self> {
        Self::ALL
            .into_iter()
            .find(|button| button.label() == label)
            .ok_or_else(|| WidgetError::UnknownButton {
                label: label.to_string(),
            })
    }

    /// Returns the character this button appends to the display, if it is an
    /// entry key.
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}
