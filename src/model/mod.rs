//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod event;
pub mod history;
pub mod key_action;
pub mod snapshot;
pub mod state;

// Re-export for convenience
pub use error::{AppError, CalcError};
pub use event::{CalcEvent, Digit, InputToken, InvalidDigit, Operator, UnknownEventName};
pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use key_action::KeyAction;
pub use snapshot::Snapshot;
pub use state::{CalculatorState, Mode, PendingOperation, ERROR_TEXT, ZERO_TEXT};
