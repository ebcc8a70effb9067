//! Pure core integration functions.
//!
//! Glue between key events and the engine, plus the text the binary prints.
//! Everything here is testable without a terminal.

use crate::config::KeyBindings;
use crate::model::{HistoryEntry, KeyAction, Snapshot};
use crate::source::tape;
use crate::state::CalculatorEngine;
use crossterm::event::KeyEvent;
use tracing::debug;

/// What happened to a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was bound to a calculator event and the engine handled it.
    Handled,
    /// No binding for this key.
    Unbound,
    /// The key is bound to quit.
    Quit,
}

/// Summary of running one tape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TapeOutcome {
    /// Number of events delivered to the engine.
    pub handled: usize,
    /// Characters with no binding, in tape order.
    pub skipped: Vec<char>,
    /// Whether a quit key stopped the tape early.
    pub quit: bool,
}

/// Route one key press through the bindings into the engine.
pub fn handle_key(engine: &mut CalculatorEngine, bindings: &KeyBindings, key: KeyEvent) -> KeyOutcome {
    match bindings.get(key) {
        Some(KeyAction::Calculator(event)) => {
            engine.handle(event);
            KeyOutcome::Handled
        }
        Some(KeyAction::Quit) => KeyOutcome::Quit,
        None => KeyOutcome::Unbound,
    }
}

/// Feed every key of `tape` to the engine, stopping at a quit key.
pub fn run_tape(engine: &mut CalculatorEngine, bindings: &KeyBindings, tape: &str) -> TapeOutcome {
    let mut outcome = TapeOutcome::default();

    for key in tape::key_events(tape) {
        match handle_key(engine, bindings, key) {
            KeyOutcome::Handled => outcome.handled += 1,
            KeyOutcome::Unbound => {
                debug!(?key, "Skipping unmapped tape key");
                if let crossterm::event::KeyCode::Char(c) = key.code {
                    outcome.skipped.push(c);
                }
            }
            KeyOutcome::Quit => {
                outcome.quit = true;
                break;
            }
        }
    }

    outcome
}

/// One-line rendering: pending expression (if any) then the display.
///
/// `"8 - │ 3"` while typing the second operand, `"42"` otherwise.
pub fn render_line(snapshot: &Snapshot) -> String {
    match &snapshot.pending {
        Some(pending) => format!("{} │ {}", pending, snapshot.display),
        None => snapshot.display.clone(),
    }
}

/// History as `"<expr> = <result>"` lines, oldest first.
pub fn render_history(history: &[HistoryEntry]) -> String {
    history
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
