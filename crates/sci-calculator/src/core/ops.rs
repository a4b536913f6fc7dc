//! Binary and unary keypad operations.
//!
//! Type-safe operation enums: every operator the keypad can produce is a
//! variant here, so the engine never dispatches on raw characters.

use serde::{Deserialize, Serialize};

/// A pending binary operator selected from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%) — reachable from the keypad but has no result arm; see
    /// [`BinaryOp::evaluate`]
    Modulo,
}

impl BinaryOp {
    /// Returns the plain operator symbol used in the operation trace
    /// (`"5 *"`, `"1 / 0 ="`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Returns the keycap text printed on the button, which differs from the
    /// trace symbol for subtraction, multiplication, and division.
    #[must_use]
    pub const fn keycap(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
            Self::Modulo => "%",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// `Modulo` returns `None`: the shipped widget's result switch never had
    /// a `%` arm, so equals with a pending `%` is a documented no-op. Division
    /// by zero is not guarded; it produces IEEE-754 infinity/NaN like any
    /// other float division.
    #[must_use]
    pub fn evaluate(&self, first: f64, second: f64) -> Option<f64> {
        match self {
            Self::Add => Some(first + second),
            Self::Subtract => Some(first - second),
            Self::Multiply => Some(first * second),
            Self::Divide => Some(first / second),
            Self::Modulo => None,
        }
    }
}

/// A single-operand scientific function applied to the current display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Square root
    Sqrt,
    /// Sine of the display value in degrees
    Sin,
    /// Cosine of the display value in degrees
    Cos,
    /// Tangent of the display value in degrees
    Tan,
    /// Base-10 logarithm
    Log,
    /// The display value squared
    Squared,
    /// The constant pi (ignores the display value)
    Pi,
}

impl UnaryOp {
    /// Returns the function symbol, used both as the keycap and in the
    /// operation trace (`"sin(90)"`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Sqrt => "\u{221a}",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Squared => "x\u{b2}",
            Self::Pi => "\u{3c0}",
        }
    }

    /// Applies the function to a value.
    ///
    /// Trigonometric functions interpret the input as degrees. Out-of-domain
    /// inputs (negative sqrt, non-positive log) are not guarded and follow
    /// IEEE-754 semantics, producing NaN or negative infinity.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
            Self::Sin => degrees_to_radians(value).sin(),
            Self::Cos => degrees_to_radians(value).cos(),
            Self::Tan => degrees_to_radians(value).tan(),
            Self::Log => value.log10(),
            Self::Squared => value.powi(2),
            Self::Pi => std::f64::consts::PI,
        }
    }
}

/// The keypad reads angles in degrees; the float intrinsics want radians.
fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
