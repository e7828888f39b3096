//! Terminal frontend
//!
//! A crossterm event loop around [`CalculatorApp`]: keys and mouse clicks in,
//! a redrawn display and keypad out.

mod app;
mod input;
mod render;

pub use app::CalculatorApp;
pub use input::{key_event_for, InputHandler, KeyAction};
pub use render::{display_line, hit_test, render};

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::CalculatorConfig;
use crate::error::KeycalcResult;

/// Runs the interactive calculator until the user quits.
///
/// The terminal is restored even when setup or the loop fails.
pub fn run(config: CalculatorConfig) -> KeycalcResult<()> {
    let mut terminal = TerminalGuard::enter(io::stdout())?;
    tracing::info!("terminal calculator started");

    let result = event_loop(&mut CalculatorApp::with_config(config), &mut terminal.out);

    drop(terminal);
    tracing::info!("terminal calculator stopped");

    result
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard restores the terminal
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode");
        }
        if let Err(e) = execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to restore the screen");
        }
    }
}

fn event_loop<W: Write>(app: &mut CalculatorApp, out: &mut W) -> KeycalcResult<()> {
    loop {
        render(app, out)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                app.handle_key(key);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(event) = app.click(mouse.column, mouse.row) {
                    tracing::debug!(%event, "keypad click");
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
