//! Domain-level keyboard actions independent of key bindings.

use super::event::CalcEvent;

/// Actions that keys can be bound to.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Forward an event to the calculator engine.
    Calculator(CalcEvent),
    /// Leave the interactive session. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// The calculator event carried by this action, if any.
    pub fn calc_event(self) -> Option<CalcEvent> {
        match self {
            Self::Calculator(event) => Some(event),
            Self::Quit => None,
        }
    }
}

impl From<CalcEvent> for KeyAction {
    fn from(event: CalcEvent) -> Self {
        Self::Calculator(event)
    }
}
