//! Calculator state owned by the engine.

use super::event::Operator;

/// Sentinel display text shown while in [`Mode::ErrorState`].
pub const ERROR_TEXT: &str = "Error";

/// Neutral display text.
pub const ZERO_TEXT: &str = "0";

/// Engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Building an operand (initial mode).
    #[default]
    Entering,
    /// Display holds a result; the next digit starts a new operand.
    JustEvaluated,
    /// An evaluation failed; display shows [`ERROR_TEXT`].
    ErrorState,
}

/// Operator captured together with its left-hand operand.
///
/// Pairing them makes "pending operator without pending operand"
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left-hand operand.
    pub operand: f64,
    /// Operator awaiting a right-hand operand.
    pub operator: Operator,
}

/// The single mutable value inside `CalculatorEngine`.
///
/// Invariants:
/// - `display` is never empty.
/// - `mode == ErrorState` implies `display == "Error"`, no pending operation
///   and an empty operand buffer.
/// - otherwise `display` parses as a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) operand: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) mode: Mode,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::idle()
    }
}

impl CalculatorState {
    /// Canonical initial state: display "0", nothing pending, `Entering`.
    pub fn idle() -> Self {
        Self {
            display: ZERO_TEXT.to_string(),
            operand: String::new(),
            pending: None,
            mode: Mode::Entering,
        }
    }

    /// Error state: display "Error", everything else reset.
    pub fn error() -> Self {
        Self {
            display: ERROR_TEXT.to_string(),
            operand: String::new(),
            pending: None,
            mode: Mode::ErrorState,
        }
    }

    /// Text currently shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operand being typed; empty when a fresh operand is expected.
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Pending operation, if any.
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Left-hand operand of the pending operation.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator of the pending operation.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the state is the error state.
    pub fn is_error(&self) -> bool {
        self.mode == Mode::ErrorState
    }

    /// Numeric value of the display (0 in the error state).
    pub fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}
