//! Keypad-driven scientific calculator widget engine.
//!
//! The widget was shipped inside a social-platform plugin runtime: a fixed
//! on-screen keypad above two text lines, driven by one button press at a
//! time. This crate is that widget's core — a small arithmetic state
//! machine ([`CalculatorEngine`](core::CalculatorEngine)) consuming typed
//! [`Button`](core::Button) events and exposing a
//! [`DisplayState`](core::DisplayState) snapshot for whatever renderer
//! hosts it — plus a terminal frontend (feature `tui`) standing in for the
//! platform renderer.
//!
//! Data flow is unidirectional: UI event → engine method → new state →
//! re-render. The engine performs no I/O, has no failure modes, and keeps
//! the shipped widget's documented quirks (the dead `Ans` key, the
//! result-less `%` operator, unvalidated decimal points).
//!
//! # Example
//!
//! ```rust
//! use sci_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.apply(Button::Digit(2));
//! engine.apply(Button::Operator(BinaryOp::Add));
//! engine.apply(Button::Digit(3));
//! let state = engine.apply(Button::Equals);
//! assert_eq!(state.display, "5");
//! assert_eq!(state.secondary, "2 + 3 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        BinaryOp, Button, CalculatorEngine, DisplayState, PendingBinary, UnaryOp, WidgetError,
        WidgetResult,
    };
    pub use crate::driver::{EngineDriver, WidgetDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
