//! Calculator state machine
//!
//! One pending binary operation at a time, evaluated left to right:
//! `3 + 4 * 2 =` folds `3 + 4` when `*` is pressed and then yields `14`.
//! Every operation is total; there is no error path.

mod number;
mod operator;

pub use number::{format_value, parse_operand};
pub use operator::Operator;

use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, FreshDecimal};
use crate::event::{DigitSymbol, InputEvent};

/// Entry text when nothing has been typed
pub const INITIAL_ENTRY: &str = "0";

/// Snapshot of everything the calculator remembers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    current_entry: String,
    pending_operand: String,
    pending_operator: Option<Operator>,
    awaiting_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The start-up state: entry `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_entry: INITIAL_ENTRY.to_string(),
            pending_operand: String::new(),
            pending_operator: None,
            awaiting_new_entry: false,
        }
    }

    /// The value being typed or last computed
    #[must_use]
    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    /// Operand captured before the pending operator; empty when none
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    /// The operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh entry
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Whether this equals the start-up state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }
}

/// The calculator: state plus the behavior switches it runs under
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with the given configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text to show on the display
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.state.current_entry
    }

    /// Applies one input event and returns the new display text
    pub fn dispatch(&mut self, event: InputEvent) -> &str {
        match event {
            InputEvent::Digit(symbol) => self.enter_digit(symbol),
            InputEvent::Operator(op) => self.select_operator(op),
            InputEvent::Evaluate => self.evaluate(),
            InputEvent::Clear => self.clear(),
            InputEvent::DeleteLastChar => self.delete_last_char(),
        }
        self.display_text()
    }

    /// Types a digit or the decimal point
    pub fn enter_digit(&mut self, symbol: DigitSymbol) {
        let state = &mut self.state;
        let c = symbol.as_char();

        if state.awaiting_new_entry {
            state.current_entry = match (symbol, self.config.fresh_decimal) {
                (DigitSymbol::DecimalPoint, FreshDecimal::ZeroPrefixed) => "0.".to_string(),
                _ => c.to_string(),
            };
            state.awaiting_new_entry = false;
        } else if state.current_entry == INITIAL_ENTRY && !symbol.is_decimal_point() {
            state.current_entry = c.to_string();
        } else if symbol.is_decimal_point() && state.current_entry.contains('.') {
            tracing::trace!(entry = %state.current_entry, "second decimal point ignored");
            return;
        } else {
            state.current_entry.push(c);
        }

        tracing::trace!(symbol = %c, entry = %state.current_entry, "digit entered");
    }

    /// Chooses the operator for the next operation.
    ///
    /// A pending operation with a freshly typed second operand is folded
    /// first, which gives left-to-right chaining.
    pub fn select_operator(&mut self, op: Operator) {
        if self.state.pending_operator.is_some() && !self.state.awaiting_new_entry {
            self.evaluate();
        }

        let state = &mut self.state;
        state.pending_operand = state.current_entry.clone();
        state.pending_operator = Some(op);
        state.awaiting_new_entry = true;

        tracing::trace!(operator = %op, operand = %state.pending_operand, "operator selected");
    }

    /// Folds the pending operation into the entry.
    ///
    /// Does nothing without a pending operator, or when no second operand
    /// has been typed since the operator was chosen.
    pub fn evaluate(&mut self) {
        let state = &mut self.state;
        let Some(op) = state.pending_operator else {
            return;
        };
        if state.awaiting_new_entry {
            return;
        }

        let lhs = parse_operand(&state.pending_operand);
        let rhs = parse_operand(&state.current_entry);
        let result = op.apply(lhs, rhs);

        state.current_entry = format_value(result, self.config.non_finite);
        state.pending_operator = None;
        state.pending_operand.clear();
        state.awaiting_new_entry = true;

        tracing::debug!(%lhs, operator = %op, %rhs, %result, "evaluated");
    }

    /// Resets to the start-up state
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
        tracing::trace!("cleared");
    }

    /// Removes the last character of the entry, falling back to `0`.
    ///
    /// Edits the visible entry even right after an operator or evaluation.
    pub fn delete_last_char(&mut self) {
        let entry = &mut self.state.current_entry;
        if entry.chars().count() > 1 {
            entry.pop();
        } else {
            *entry = INITIAL_ENTRY.to_string();
        }
        tracing::trace!(entry = %entry, "deleted last character");
    }
}
