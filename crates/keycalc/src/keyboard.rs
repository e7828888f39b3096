//! Keyboard filter
//!
//! Maps key names (as a browser or terminal reports them) to input events.
//! Keys outside the recognized set map to `None` and never reach the state
//! machine.

use crate::event::InputEvent;

/// Maps a key name to an input event.
///
/// | Key                  | Event            |
/// |----------------------|------------------|
/// | `0`-`9`, `.`         | digit            |
/// | `+` `-` `*` `/`      | operator         |
/// | `Enter`, `=`         | evaluate         |
/// | `Backspace`          | delete last char |
/// | `Escape`, `c`, `C`   | clear            |
#[must_use]
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    match key {
        "Enter" => Some(InputEvent::Evaluate),
        "Backspace" => Some(InputEvent::DeleteLastChar),
        "Escape" | "c" | "C" => Some(InputEvent::Clear),
        other => InputEvent::from_symbol(other),
    }
}

/// Splits a script argument into key names.
///
/// Named keys (`Enter`, `Backspace`, `Escape`) stay whole; anything else is
/// read as a run of single-character keys, so `12+3=` is five keys.
#[must_use]
pub fn split_keys(arg: &str) -> Vec<String> {
    match arg {
        "Enter" | "Backspace" | "Escape" => vec![arg.to_string()],
        _ => arg.chars().map(String::from).collect(),
    }
}
