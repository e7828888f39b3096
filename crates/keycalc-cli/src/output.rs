//! Output formatting for replayed key sequences

use console::{style, Term};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::runner::{Replay, Step};

/// Output format for replay results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Writes results to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Printer {
    /// Create a printer on stdout
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
        }
    }

    /// Print a replay in the requested format
    pub fn replay(&self, replay: &Replay, format: OutputFormat, steps: bool) -> CliResult<()> {
        let text = match format {
            OutputFormat::Text => render_text(replay, steps, self.use_color),
            OutputFormat::Json => serde_json::to_string_pretty(replay)?,
        };
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Print a YAML document as-is
    pub fn yaml(&self, yaml: &str) -> CliResult<()> {
        self.term.write_str(yaml)?;
        Ok(())
    }
}

fn render_step(step: &Step, use_color: bool) -> String {
    let key = format!("{:>9}", step.key);
    if use_color {
        format!("{}  {}", style(key).cyan(), step.display)
    } else {
        format!("{key}  {}", step.display)
    }
}

/// Text rendering: one `key  display` line per step when `steps` is set,
/// then the final display on its own line.
#[must_use]
pub fn render_text(replay: &Replay, steps: bool, use_color: bool) -> String {
    let mut out = String::new();
    if steps {
        for step in &replay.steps {
            out.push_str(&render_step(step, use_color));
            out.push('\n');
        }
    }
    if use_color {
        out.push_str(&style(&replay.display).bold().to_string());
    } else {
        out.push_str(&replay.display);
    }
    out
}
