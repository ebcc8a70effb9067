//! Acceptance Test Harness for keyboard-driven calculator testing
//!
//! Wraps a `CalculatorEngine` plus `KeyBindings` and exposes the same key
//! interface the interactive terminal session uses, so acceptance tests
//! exercise the full key → binding → engine path.

use crate::config::KeyBindings;
use crate::integration::{self, KeyOutcome};
use crate::model::Snapshot;
use crate::state::{CalculatorEngine, EngineConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Test harness for acceptance testing
pub struct CalculatorHarness {
    engine: CalculatorEngine,
    bindings: KeyBindings,
    running: bool,
}

impl CalculatorHarness {
    /// Harness with default engine limits and default key bindings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Harness with custom engine limits.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            bindings: KeyBindings::default(),
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If the session quit as a result of this key
    /// * `false` - If the session is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let outcome = integration::handle_key(&mut self.engine, &self.bindings, KeyEvent::new(key, mods));
        if outcome == KeyOutcome::Quit {
            self.running = false;
        }

        !self.running
    }

    /// Send a sequence of keys, stopping at quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.engine.current_display()
    }

    /// Access the engine for assertions.
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Owned snapshot of the engine.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Check if the session is still running (no quit key seen)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The status line the interactive session would draw.
    pub fn render_to_string(&self) -> String {
        integration::render_line(&self.engine.snapshot())
    }
}
