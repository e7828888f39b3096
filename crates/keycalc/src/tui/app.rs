//! Terminal application state

use crossterm::event::KeyEvent;

use super::input::{InputHandler, KeyAction};
use super::render::hit_test;
use crate::config::CalculatorConfig;
use crate::core::Calculator;
use crate::event::InputEvent;
use crate::keypad::Keypad;

/// Interactive calculator: the state machine plus keypad feedback
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    input: InputHandler,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with the given configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            ..Self::default()
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display_text()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyAction {
        let action = self.input.handle_key(event);
        self.handle_action(action);
        action
    }

    /// Applies a key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(event) => self.apply(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal coordinates.
    ///
    /// Returns the event fired, or `None` when the click missed every button.
    pub fn click(&mut self, x: u16, y: u16) -> Option<InputEvent> {
        let (row, col) = hit_test(x, y)?;
        let event = self.keypad.click_at(row, col)?;
        self.calculator.dispatch(event);
        Some(event)
    }

    fn apply(&mut self, event: InputEvent) {
        self.keypad.highlight(event);
        self.calculator.dispatch(event);
    }
}
