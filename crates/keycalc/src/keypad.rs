//! Button keypad
//!
//! The clickable button panel. Each button has a stable id (`num-7`,
//! `op-plus`, `fn-equals`, ...) and the input event it fires. Frontends
//! look buttons up by id or grid position and forward the event.
//!
//! Layout:
//! ```text
//! [ C ] [DEL] [ / ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```

use crate::core::Operator;
use crate::event::{DigitSymbol, InputEvent};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Stable element id
    pub id: String,
    /// Text on the button
    pub label: String,
    /// Event fired on click
    pub action: InputEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button for an action at a grid position
    #[must_use]
    pub fn new(action: InputEvent, row: usize, col: usize) -> Self {
        Self {
            id: button_id(action),
            label: action.label(),
            action,
            row,
            col,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// Element id for the button firing `action`
#[must_use]
pub fn button_id(action: InputEvent) -> String {
    match action {
        InputEvent::Digit(DigitSymbol::Digit(d)) => format!("num-{d}"),
        InputEvent::Digit(DigitSymbol::DecimalPoint) => "num-decimal".to_string(),
        InputEvent::Operator(op) => format!("op-{}", op.name()),
        InputEvent::Evaluate => "fn-equals".to_string(),
        InputEvent::Clear => "fn-clear".to_string(),
        InputEvent::DeleteLastChar => "fn-delete".to_string(),
    }
}

/// The calculator button panel
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: u8| InputEvent::Digit(DigitSymbol::Digit(d));
        let op = InputEvent::Operator;
        let layout: [&[InputEvent]; 5] = [
            &[
                InputEvent::Clear,
                InputEvent::DeleteLastChar,
                op(Operator::Divide),
                op(Operator::Multiply),
            ],
            &[digit(7), digit(8), digit(9), op(Operator::Subtract)],
            &[digit(4), digit(5), digit(6), op(Operator::Add)],
            &[digit(1), digit(2), digit(3), InputEvent::Evaluate],
            &[digit(0), InputEvent::Digit(DigitSymbol::DecimalPoint)],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Iterates over all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button at a grid position; empty cells are `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button firing `action`
    #[must_use]
    pub fn find_by_action(&self, action: InputEvent) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Clicks a button by id, highlighting it and returning its event
    pub fn click(&mut self, id: &str) -> Option<InputEvent> {
        let action = self.find_by_id(id)?.action;
        self.highlight(action);
        Some(action)
    }

    /// Clicks the button at a grid position
    pub fn click_at(&mut self, row: usize, col: usize) -> Option<InputEvent> {
        let action = self.get_button_at(row, col)?.action;
        self.highlight(action);
        Some(action)
    }

    /// Highlights the button for an event (e.g. after a key press)
    pub fn highlight(&mut self, action: InputEvent) {
        for btn in &mut self.buttons {
            btn.set_pressed(btn.action == action);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// The currently highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===== Layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 18);
    }

    #[test]
    fn test_keypad_default() {
        assert_eq!(Keypad::default().button_count(), 18);
    }

    #[test]
    fn test_every_event_kind_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad
                .find_by_action(InputEvent::Digit(DigitSymbol::Digit(d)))
                .is_some());
        }
        assert!(keypad
            .find_by_action(InputEvent::Digit(DigitSymbol::DecimalPoint))
            .is_some());
        for op in Operator::ALL {
            assert!(keypad.find_by_action(InputEvent::Operator(op)).is_some());
        }
        for action in [
            InputEvent::Evaluate,
            InputEvent::Clear,
            InputEvent::DeleteLastChar,
        ] {
            assert!(keypad.find_by_action(action).is_some());
        }
    }

    #[test]
    fn test_ids_and_positions_unique() {
        let keypad = Keypad::new();
        let ids: HashSet<_> = keypad.buttons().map(|b| b.id.clone()).collect();
        let positions: HashSet<_> = keypad.buttons().map(|b| (b.row, b.col)).collect();
        assert_eq!(ids.len(), keypad.button_count());
        assert_eq!(positions.len(), keypad.button_count());
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().id, "fn-clear");
        assert_eq!(keypad.get_button_at(1, 0).unwrap().label, "7");
        assert_eq!(keypad.get_button_at(3, 3).unwrap().id, "fn-equals");
        assert_eq!(keypad.get_button_at(4, 1).unwrap().id, "num-decimal");
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(9, 0).is_none());
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id(InputEvent::Operator(Operator::Add)), "op-plus");
        assert_eq!(button_id(InputEvent::Operator(Operator::Divide)), "op-divide");
        assert_eq!(button_id(InputEvent::DeleteLastChar), "fn-delete");
        assert_eq!(button_id(InputEvent::Digit(DigitSymbol::Digit(3))), "num-3");
    }

    // ===== Click / highlight tests =====

    #[test]
    fn test_click_returns_event_and_highlights() {
        let mut keypad = Keypad::new();
        let event = keypad.click("op-times");
        assert_eq!(event, Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(keypad.pressed().unwrap().id, "op-times");
    }

    #[test]
    fn test_click_unknown_id() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.click("btn-power"), None);
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_click_at() {
        let mut keypad = Keypad::new();
        assert_eq!(
            keypad.click_at(2, 1),
            Some(InputEvent::Digit(DigitSymbol::Digit(5)))
        );
        assert_eq!(keypad.click_at(4, 3), None);
    }

    #[test]
    fn test_highlight_moves() {
        let mut keypad = Keypad::new();
        keypad.highlight(InputEvent::Clear);
        keypad.highlight(InputEvent::Evaluate);
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].id, "fn-equals");
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.click("num-1");
        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }
}
