//! Input events accepted by the calculator
//!
//! Every frontend (keyboard, keypad clicks, scripted key sequences) turns
//! its raw input into an [`InputEvent`] and hands it to
//! [`Calculator::dispatch`](crate::Calculator::dispatch).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Operator;
use crate::error::KeycalcError;

/// A digit key or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitSymbol {
    /// 0 through 9
    Digit(u8),
    /// `.`
    DecimalPoint,
}

impl DigitSymbol {
    /// Maps a character to a digit symbol
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::DecimalPoint),
            _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }

    /// The character this symbol types
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('0'),
            Self::DecimalPoint => '.',
        }
    }

    /// Whether this is the decimal point
    #[must_use]
    pub const fn is_decimal_point(self) -> bool {
        matches!(self, Self::DecimalPoint)
    }
}

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Type a digit or decimal point
    Digit(DigitSymbol),
    /// Choose an operator
    Operator(Operator),
    /// Fold the pending operation (`=`)
    Evaluate,
    /// Reset everything
    Clear,
    /// Drop the last character of the entry
    DeleteLastChar,
}

impl InputEvent {
    /// Maps a single-character key symbol (`0`-`9`, `.`, `+ - * /`, `=`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(symbol) = DigitSymbol::from_char(c) {
            return Some(Self::Digit(symbol));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(Self::Operator(op));
        }
        (c == '=').then_some(Self::Evaluate)
    }

    /// Maps a symbol string; anything but one recognized character is `None`
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Short label as shown on a keypad button
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(symbol) => symbol.as_char().to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::DeleteLastChar => "DEL".to_string(),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for InputEvent {
    type Err = KeycalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| KeycalcError::unknown_symbol(s))
    }
}
