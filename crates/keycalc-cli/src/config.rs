//! CLI configuration

use std::io::IsTerminal;

use keycalc::{CalculatorConfig, FreshDecimal, NonFiniteStyle};
use serde::{Deserialize, Serialize};

use crate::commands::Cli;
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational messages
    Verbose,
    /// Debug - every evaluation
    Debug,
    /// Trace - every transition
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should stdout be colored
    #[must_use]
    pub fn should_color(self) -> bool {
        self.enabled_for(&std::io::stdout())
    }

    /// Should `stream` be colored; `Auto` colors terminals only
    #[must_use]
    pub fn enabled_for(self, stream: &impl IsTerminal) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stream.is_terminal(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Calculator behavior after file and flag overrides
    pub calculator: CalculatorConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set calculator configuration
    #[must_use]
    pub const fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }

    /// Verbosity and color from the global flags.
    ///
    /// Needs no I/O, so logging can be set up from it before anything is
    /// loaded.
    #[must_use]
    pub fn from_flags(cli: &Cli) -> Self {
        Self::new()
            .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
            .with_color(cli.color.into())
    }

    /// Load the calculator configuration.
    ///
    /// The `--config` file is read first; `--literal-decimal` and
    /// `--js-non-finite` override whatever it says.
    pub fn load_calculator(self, cli: &Cli) -> CliResult<Self> {
        let mut calculator = match &cli.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if cli.literal_decimal {
            calculator = calculator.with_fresh_decimal(FreshDecimal::Literal);
        }
        if cli.js_non_finite {
            calculator = calculator.with_non_finite(NonFiniteStyle::Javascript);
        }

        Ok(self.with_calculator(calculator))
    }
}
