//! Calculator behavior configuration
//!
//! Two behaviors are not pinned down by the keypad itself: what a decimal
//! point does at the start of a fresh entry, and how non-finite results are
//! spelled on the display. Both are switches here, loadable from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KeycalcError, KeycalcResult};

/// What a decimal point does when it starts a fresh entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshDecimal {
    /// The entry becomes `0.`
    #[default]
    ZeroPrefixed,
    /// The entry becomes a bare `.`
    Literal,
}

/// Spelling of infinite and NaN results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonFiniteStyle {
    /// `inf`, `-inf`, `NaN`
    #[default]
    Rust,
    /// `Infinity`, `-Infinity`, `NaN`
    Javascript,
}

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CalculatorConfig {
    /// Decimal point policy for fresh entries
    pub fresh_decimal: FreshDecimal,
    /// Display spelling for non-finite results
    pub non_finite: NonFiniteStyle,
}

impl CalculatorConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fresh decimal policy
    #[must_use]
    pub const fn with_fresh_decimal(mut self, fresh_decimal: FreshDecimal) -> Self {
        self.fresh_decimal = fresh_decimal;
        self
    }

    /// Set the non-finite display style
    #[must_use]
    pub const fn with_non_finite(mut self, non_finite: NonFiniteStyle) -> Self {
        self.non_finite = non_finite;
        self
    }

    /// Parse a configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(text: &str) -> KeycalcResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> KeycalcResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            KeycalcError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> KeycalcResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
