//! keycalc - a button- and keyboard-driven four-function calculator
//!
//! The core is a small input state machine: digits build up an entry, an
//! operator captures it as the pending operand, and `=` (or the next
//! operator) folds the pending operation. Chains evaluate left to right with
//! no precedence, and arithmetic is plain IEEE-754 `f64`, so `1 / 0` shows
//! infinity rather than failing.
//!
//! Frontends only translate raw input into [`InputEvent`]s:
//!
//! - [`keyboard`] filters key names,
//! - [`keypad`] maps button clicks,
//! - [`tui`] runs an interactive terminal calculator (feature `tui`).
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["3", "+", "4", "*"] {
//!     calc.dispatch(event_for_key(key).unwrap());
//! }
//! // `3 + 4` was folded when `*` was pressed
//! assert_eq!(calc.display_text(), "7");
//!
//! calc.dispatch(event_for_key("2").unwrap());
//! assert_eq!(calc.dispatch(InputEvent::Evaluate), "14");
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

pub mod config;
pub mod core;
pub mod driver;
mod error;
pub mod event;
pub mod keyboard;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::{CalculatorConfig, FreshDecimal, NonFiniteStyle};
pub use crate::core::{Calculator, CalculatorState, Operator};
pub use error::{KeycalcError, KeycalcResult};
pub use event::{DigitSymbol, InputEvent};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, FreshDecimal, NonFiniteStyle};
    pub use crate::core::{Calculator, CalculatorState, Operator};
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::error::{KeycalcError, KeycalcResult};
    pub use crate::event::{DigitSymbol, InputEvent};
    pub use crate::keyboard::event_for_key;
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
