//! Key event sources for the binary.
//!
//! - Tapes: key characters given on the command line or piped on stdin
//! - Interactive: a raw-mode terminal session

use std::io::{self, IsTerminal};

pub mod tape;
pub mod terminal;

/// Where key presses come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Tapes evaluated in order against one engine.
    Tapes(Vec<String>),
    /// Live key presses from the terminal.
    Interactive,
}

/// Pick the input source.
///
/// # Logic:
/// 1. `--interactive` wins
/// 2. Keys given on the command line form a single tape
/// 3. Piped stdin: one tape per non-blank line
/// 4. Otherwise stdin is a terminal, so go interactive
///
/// # Errors
///
/// Returns I/O errors from reading piped stdin.
pub fn detect_input_source(keys: Option<String>, interactive: bool) -> io::Result<InputSource> {
    if interactive {
        return Ok(InputSource::Interactive);
    }
    if let Some(keys) = keys {
        return Ok(InputSource::Tapes(vec![keys]));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(InputSource::Interactive);
    }
    tape::read_lines(stdin.lock()).map(InputSource::Tapes)
}
