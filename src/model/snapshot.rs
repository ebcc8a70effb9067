//! Read-only view of the engine handed to observers.

use super::history::HistoryEntry;
use serde::Serialize;

/// Owned copy of everything an adapter needs to render.
///
/// Produced after every handled event; holds no reference back into
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current display text (never empty).
    pub display: String,
    /// Pending expression preview such as `"8 -"`, if an operator is pending.
    pub pending: Option<String>,
    /// Whether the engine is in the error state.
    pub is_error: bool,
    /// Completed calculations, oldest first.
    pub history: Vec<HistoryEntry>,
}
