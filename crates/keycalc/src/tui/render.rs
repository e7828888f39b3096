//! Terminal rendering
//!
//! Draws the calculator with plain crossterm commands:
//!
//! ```text
//! ┌──────────────────────┐
//! │ 3 +                7 │
//! ├──────────────────────┤
//! │ [ C ][DEL][ / ][ * ] │
//! │ [ 7 ][ 8 ][ 9 ][ - ] │
//! │ [ 4 ][ 5 ][ 6 ][ + ] │
//! │ [ 1 ][ 2 ][ 3 ][ = ] │
//! │ [ 0 ][ . ]           │
//! └──────────────────────┘
//!  q quit  Esc clear  ⌫ delete
//! ```

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::app::CalculatorApp;
use crate::core::CalculatorState;
use crate::keypad::KeypadButton;

/// Width of one keypad cell in columns
pub const CELL_WIDTH: u16 = 5;
/// Column of the first keypad cell
pub const KEYPAD_LEFT: u16 = 2;
/// Row of the first keypad row
pub const KEYPAD_TOP: u16 = 3;
/// Columns between the two vertical borders
pub const INNER_WIDTH: u16 = 22;

const KEYPAD_ROWS: u16 = 5;
const KEYPAD_COLS: u16 = 4;
const HELP: &str = " q quit  Esc clear  \u{232b} delete";

/// Maps terminal coordinates to a keypad (row, col)
#[must_use]
pub fn hit_test(x: u16, y: u16) -> Option<(usize, usize)> {
    if x < KEYPAD_LEFT || y < KEYPAD_TOP {
        return None;
    }
    let col = (x - KEYPAD_LEFT) / CELL_WIDTH;
    let row = y - KEYPAD_TOP;
    (col < KEYPAD_COLS && row < KEYPAD_ROWS).then_some((row as usize, col as usize))
}

/// Display row contents: pending operation on the left, entry on the right.
///
/// Entries wider than the row keep their rightmost characters.
#[must_use]
pub fn display_line(state: &CalculatorState, width: usize) -> String {
    let entry: Vec<char> = state.current_entry().chars().collect();
    let entry: String = entry[entry.len().saturating_sub(width)..].iter().collect();

    let pending = state
        .pending_operator()
        .map(|op| format!("{} {}", state.pending_operand(), op.symbol()))
        .unwrap_or_default();

    let used = entry.chars().count();
    let pending_len = pending.chars().count();
    if pending_len + 1 + used <= width {
        format!("{pending}{:>pad$}", entry, pad = width - pending_len)
    } else {
        format!("{entry:>width$}")
    }
}

fn button_text(button: &KeypadButton) -> String {
    if button.label.chars().count() >= 3 {
        format!("[{}]", button.label)
    } else {
        format!("[ {} ]", button.label)
    }
}

/// Draws the whole app
pub fn render<W: Write>(app: &CalculatorApp, out: &mut W) -> io::Result<()> {
    let inner = INNER_WIDTH as usize;
    let horizontal = "─".repeat(inner);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(out, Print(format!("┌{horizontal}┐")))?;

    let line = display_line(app.calculator().state(), inner - 2);
    queue!(
        out,
        MoveTo(0, 1),
        Print("│ "),
        SetAttribute(Attribute::Bold),
        Print(line),
        SetAttribute(Attribute::Reset),
        Print(" │"),
        MoveTo(0, 2),
        Print(format!("├{horizontal}┤")),
    )?;

    for row in 0..KEYPAD_ROWS {
        let y = KEYPAD_TOP + row;
        queue!(
            out,
            MoveTo(0, y),
            Print(format!("│{:inner$}│", "")),
        )?;
    }

    for button in app.keypad().buttons() {
        let x = KEYPAD_LEFT + button.col as u16 * CELL_WIDTH;
        let y = KEYPAD_TOP + button.row as u16;
        queue!(out, MoveTo(x, y))?;
        if button.pressed {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        } else {
            queue!(out, SetForegroundColor(Color::Cyan))?;
        }
        queue!(
            out,
            Print(button_text(button)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }

    let bottom = KEYPAD_TOP + KEYPAD_ROWS;
    queue!(
        out,
        MoveTo(0, bottom),
        Print(format!("└{horizontal}┘")),
        MoveTo(0, bottom + 1),
        SetForegroundColor(Color::DarkGrey),
        Print(HELP),
        ResetColor,
    )?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Calculator;
    use crate::driver::CalculatorDriver;

    fn state_after(keys: &str) -> CalculatorState {
        let mut calc = Calculator::new();
        calc.press_all(keys);
        calc.state().clone()
    }

    // ===== hit_test =====

    #[test]
    fn test_hit_test_corners() {
        assert_eq!(hit_test(KEYPAD_LEFT, KEYPAD_TOP), Some((0, 0)));
        assert_eq!(
            hit_test(KEYPAD_LEFT + 4 * CELL_WIDTH - 1, KEYPAD_TOP + 4),
            Some((4, 3))
        );
    }

    #[test]
    fn test_hit_test_outside() {
        assert_eq!(hit_test(0, KEYPAD_TOP), None);
        assert_eq!(hit_test(KEYPAD_LEFT, 1), None);
        assert_eq!(hit_test(KEYPAD_LEFT + 4 * CELL_WIDTH, KEYPAD_TOP), None);
        assert_eq!(hit_test(KEYPAD_LEFT, KEYPAD_TOP + 5), None);
    }

    // ===== display_line =====

    #[test]
    fn test_display_line_right_aligned() {
        let line = display_line(&state_after("42"), 10);
        assert_eq!(line, "        42");
    }

    #[test]
    fn test_display_line_shows_pending() {
        let line = display_line(&state_after("3+"), 10);
        assert_eq!(line, "3 +      3");
    }

    #[test]
    fn test_display_line_truncates_left() {
        let line = display_line(&state_after("123456789"), 5);
        assert_eq!(line, "56789");
    }

    #[test]
    fn test_display_line_drops_pending_when_crowded() {
        let line = display_line(&state_after("12345+678"), 10);
        assert_eq!(line, "       678");
        let line = display_line(&state_after("12345+6789"), 10);
        assert_eq!(line, "      6789");
    }

    // ===== render =====

    #[test]
    fn test_render_contains_display_and_buttons() {
        let app = CalculatorApp::new();
        let mut out = Vec::new();
        render(&app, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("[DEL]"));
        assert!(text.contains("[ 7 ]"));
        assert!(text.contains("[ = ]"));
        assert!(text.contains('0'));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_render_after_input() {
        let mut app = CalculatorApp::new();
        app.click(KEYPAD_LEFT, KEYPAD_TOP + 3);
        let mut out = Vec::new();
        render(&app, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains(&display_line(app.calculator().state(), 20)));
    }
}
