//! Error types for keycalc.
//!
//! The state machine itself never fails; these errors only come from the
//! boundaries (symbol parsing for strict callers, configuration loading).

use thiserror::Error;

/// Result type for keycalc operations
pub type KeycalcResult<T> = Result<T, KeycalcError>;

/// Errors raised at the edges of the calculator
#[derive(Debug, Error)]
pub enum KeycalcError {
    /// A key or symbol outside the recognized set
    #[error("Unrecognized symbol: {symbol:?}")]
    UnknownSymbol {
        /// The rejected symbol
        symbol: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl KeycalcError {
    /// Create an unknown symbol error
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
