//! Key tapes: strings of key characters fed to the calculator in order.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::{self, BufRead};

/// Turn a tape into key events, one per non-whitespace character.
///
/// `"12 + 3 ="` yields the events for `1`, `2`, `+`, `3`, `=`.
pub fn key_events(tape: &str) -> impl Iterator<Item = KeyEvent> + '_ {
    tape.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Read tapes line by line. Blank lines are dropped.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tapes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            tapes.push(line);
        }
    }
    Ok(tapes)
}
