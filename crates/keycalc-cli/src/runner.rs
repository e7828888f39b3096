//! Key sequence replay

use keycalc::keyboard::{event_for_key, split_keys};
use keycalc::{Calculator, CalculatorConfig, CalculatorState};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// One accepted key and what it left behind
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Key name as given
    pub key: String,
    /// Display after the key
    pub display: String,
    /// Full state after the key
    pub state: CalculatorState,
}

/// Result of replaying a key sequence
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    /// Accepted keys in order
    pub steps: Vec<Step>,
    /// Unrecognized keys that were skipped
    pub skipped: Vec<String>,
    /// Final display
    pub display: String,
}

/// Feeds keys to a fresh calculator
#[derive(Debug)]
pub struct KeyRunner {
    calculator: Calculator,
    strict: bool,
}

impl KeyRunner {
    /// Create a runner
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            strict: false,
        }
    }

    /// Reject unrecognized keys instead of skipping them
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replay every key in `args`.
    ///
    /// Each argument is split with [`split_keys`], so `12+3=` is five keys
    /// and `Backspace` is one.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> CliResult<Replay> {
        let mut steps = Vec::new();
        let mut skipped = Vec::new();

        for key in args.iter().flat_map(|arg| split_keys(arg.as_ref())) {
            match event_for_key(&key) {
                Some(event) => {
                    let shown = self.calculator.dispatch(event).to_string();
                    tracing::trace!(%key, %shown, "key");
                    steps.push(Step {
                        key,
                        display: shown,
                        state: self.calculator.state().clone(),
                    });
                }
                None if self.strict => {
                    return Err(CliError::invalid_argument(format!(
                        "unrecognized key {key:?}"
                    )));
                }
                None => {
                    tracing::warn!(%key, "skipping unrecognized key");
                    skipped.push(key);
                }
            }
        }

        tracing::info!(
            accepted = steps.len(),
            skipped = skipped.len(),
            "replay finished"
        );

        Ok(Replay {
            steps,
            skipped,
            display: self.calculator.display_text().to_string(),
        })
    }
}
