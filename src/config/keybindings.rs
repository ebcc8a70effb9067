//! Keyboard bindings configuration.

use super::loader::ConfigError;
use crate::model::{CalcEvent, Digit, KeyAction, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default pocket-calculator bindings with option to override via
/// configuration. Shift is ignored for character keys, since terminals
/// disagree on whether `+` or `%` arrive with it.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Look up the action for an unmodified character key.
    pub fn get_char(&self, c: char) -> Option<KeyAction> {
        self.get(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    /// Bind (or rebind) a key.
    pub fn insert(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    /// Apply `"<key>" = "<action>"` overrides from the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBinding` if a key name or action name is
    /// not recognized.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Result<Self, ConfigError> {
        for (key_name, action_name) in overrides {
            let key = parse_key(key_name).ok_or_else(|| ConfigError::InvalidBinding {
                key: key_name.clone(),
                reason: "unknown key name".to_string(),
            })?;
            let action = parse_action(action_name).map_err(|reason| ConfigError::InvalidBinding {
                key: key_name.clone(),
                reason,
            })?;
            self.insert(key, action);
        }
        Ok(self)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        let char_key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let calc = |event: CalcEvent| KeyAction::Calculator(event);

        // Digits
        for c in '0'..='9' {
            if let Some(digit) = Digit::from_char(c) {
                bindings.insert(char_key(c), calc(CalcEvent::Digit(digit)));
            }
        }

        // Decimal point
        bindings.insert(char_key('.'), calc(CalcEvent::DecimalPoint));
        bindings.insert(char_key(','), calc(CalcEvent::DecimalPoint));

        // Operators (ASCII and typographic)
        for (c, op) in [
            ('+', Operator::Add),
            ('-', Operator::Sub),
            ('−', Operator::Sub),
            ('*', Operator::Mul),
            ('x', Operator::Mul),
            ('×', Operator::Mul),
            ('/', Operator::Div),
            ('÷', Operator::Div),
        ] {
            bindings.insert(char_key(c), calc(CalcEvent::Operator(op)));
        }

        // Unary keys
        bindings.insert(char_key('%'), calc(CalcEvent::Percent));
        bindings.insert(char_key('n'), calc(CalcEvent::SignToggle));
        bindings.insert(char_key('_'), calc(CalcEvent::SignToggle));
        bindings.insert(char_key('±'), calc(CalcEvent::SignToggle));

        // Equals
        bindings.insert(char_key('='), calc(CalcEvent::Equals));
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            calc(CalcEvent::Equals),
        );

        // Editing
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            calc(CalcEvent::Backspace),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            calc(CalcEvent::Backspace),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            calc(CalcEvent::Clear),
        );
        bindings.insert(char_key('c'), calc(CalcEvent::Clear));

        // Application controls
        bindings.insert(char_key('q'), KeyAction::Quit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        bindings
    }
}

/// Drop Shift from character keys; keep everything else as-is.
fn normalize(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(_) => KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => KeyEvent::new(key.code, key.modifiers),
    }
}

/// Parse a key name from the config file: a single character, or one of
/// `enter`, `escape`/`esc`, `backspace`, `delete`/`del`, `tab`, `space`.
pub fn parse_key(name: &str) -> Option<KeyEvent> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "escape" | "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        _ => return None,
    };
    Some(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Parse an action name: `"quit"` or any calculator event name.
pub fn parse_action(name: &str) -> Result<KeyAction, String> {
    if name.trim().eq_ignore_ascii_case("quit") {
        return Ok(KeyAction::Quit);
    }
    name.parse::<CalcEvent>()
        .map(KeyAction::Calculator)
        .map_err(|e| e.to_string())
}
