//! Calculator TUI Example
//!
//! Interactive terminal calculator with default settings.
//!
//! Run with: cargo run --example calculator_tui --features tui

use keycalc::{tui, CalculatorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tui::run(CalculatorConfig::default())?;
    Ok(())
}
