//! Core calculator module: the state machine and its input vocabulary.
//!
//! Everything in here is frontend-free and infallible by design; the error
//! type below exists for the seams around the core (label resolution,
//! terminal I/O), not for arithmetic.

pub mod button;
pub mod engine;
pub mod format;
mod ops;

pub use button::Button;
pub use engine::{CalculatorEngine, DisplayState, PendingBinary};
pub use ops::{BinaryOp, UnaryOp};

use thiserror::Error;

/// Result type for fallible widget-boundary operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors that can occur at the widget boundary
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A forwarded control identifier matched no keypad button
    #[error("no keypad button with label {label:?}")]
    UnknownButton {
        /// The unresolved label
        label: String,
    },

    /// Terminal I/O error from the frontend
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== WidgetError tests =====

    #[test]
    fn test_unknown_button_display() {
        let err = WidgetError::UnknownButton {
            label: "hyp".into(),
        };
        assert_eq!(format!("{err}"), "no keypad button with label \"hyp\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: WidgetError = io.into();
        assert!(matches!(err, WidgetError::Io(_)));
        assert!(err.to_string().contains("tty gone"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(WidgetError::UnknownButton {
            label: "x".into(),
        });
        assert!(err.to_string().contains("keypad"));
    }
}
