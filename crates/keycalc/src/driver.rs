//! Unified Calculator Driver
//!
//! Write the verification once, run it against every frontend. A driver
//! feeds key names into some frontend and reads back its display; the
//! `verify_*` routines below hold the behavioral contract.

use crate::core::{Calculator, CalculatorState};
use crate::keyboard::{event_for_key, split_keys};
use crate::keypad::{button_id, Keypad};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key by name (`7`, `+`, `Enter`, `Backspace`, `Escape`, ...).
    ///
    /// Returns whether the key was recognized.
    fn press(&mut self, key: &str) -> bool;

    /// Current display text
    fn display(&self) -> String;

    /// Current state snapshot
    fn state(&self) -> CalculatorState;

    /// Resets the calculator
    fn clear(&mut self) {
        self.press("Escape");
    }

    /// Presses every key in `keys`, see [`split_keys`]
    fn press_all(&mut self, keys: &str) {
        for key in split_keys(keys) {
            self.press(&key);
        }
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, key: &str) -> bool {
        event_for_key(key).map(|event| self.dispatch(event)).is_some()
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn state(&self) -> CalculatorState {
        Calculator::state(self).clone()
    }
}

/// Driver that goes through keypad clicks instead of the keyboard
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    calculator: Calculator,
}

impl KeypadDriver {
    /// Creates a driver with a default calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            keypad: Keypad::new(),
            calculator,
        }
    }

    /// Clicks a button by element id
    pub fn click(&mut self, id: &str) -> Option<&str> {
        let event = self.keypad.click(id)?;
        Some(self.calculator.dispatch(event))
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, key: &str) -> bool {
        let Some(event) = event_for_key(key) else {
            return false;
        };
        self.click(&button_id(event)).is_some()
    }

    fn display(&self) -> String {
        self.calculator.display_text().to_string()
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }
}

/// Terminal app driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, CalculatorState};
    use crate::tui::{key_event_for, CalculatorApp, KeyAction};

    /// Driver feeding crossterm key events into the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: &str) -> bool {
            key_event_for(key)
                .map(|event| self.app.handle_key(event))
                .is_some_and(|action| matches!(action, KeyAction::Input(_)))
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn state(&self) -> CalculatorState {
            self.app.calculator().state().clone()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared driver checks =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate, leading zero is replaced, one decimal point at most
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("123");
    assert_eq!(driver.display(), "123");

    driver.clear();
    driver.press_all("0.5.5");
    assert_eq!(driver.display(), "0.55");
    driver.clear();
}

/// The four operators, and left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("5+3=", "8"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        driver.clear();
        driver.press_all(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }

    driver.clear();
    driver.press_all("3+4*");
    assert_eq!(driver.display(), "7");
    driver.press_all("2");
    driver.press("Enter");
    assert_eq!(driver.display(), "14");
    driver.clear();
}

/// Division by zero shows infinity or NaN instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("1/0=");
    let display = driver.display();
    assert!(display == "inf" || display == "Infinity", "got {display}");

    driver.clear();
    driver.press_all("0/0=");
    assert_eq!(driver.display(), "NaN");
    driver.clear();
}

/// Backspace drops one character, falling back to `0`
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("56");
    driver.press("Backspace");
    assert_eq!(driver.display(), "5");
    driver.press("Backspace");
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Clear restores the start-up state from anywhere
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("987+6");
    driver.press("Escape");
    assert!(driver.state().is_initial());
    assert_eq!(driver.display(), "0");
}

/// `=` with nothing pending changes nothing
pub fn verify_evaluate_noop<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("42");
    let before = driver.state();
    driver.press("=");
    assert_eq!(driver.state(), before);
    driver.clear();
}

/// Unrecognized keys are filtered before they reach the calculator
pub fn verify_ignored_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("12");
    let before = driver.state();
    for key in ["%", "Tab", "x", "ArrowUp"] {
        assert!(!driver.press(key), "{key} should be ignored");
    }
    assert_eq!(driver.state(), before);
    driver.clear();
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_delete(driver);
    verify_clear(driver);
    verify_evaluate_noop(driver);
    verify_ignored_keys(driver);
}
