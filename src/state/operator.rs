//! Operator, percent and equals resolution.
//!
//! Pure decision functions: given the current state and an incoming event,
//! decide what the engine should do. Nothing here mutates state or performs
//! arithmetic.

use crate::format::parse_number;
use crate::model::{CalculatorState, Mode, Operator, PendingOperation};

/// What an operator key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatorResolution {
    /// No operation pending: capture the current value with the operator.
    Start(PendingOperation),
    /// Operator pending but no operand typed yet: swap the operator.
    Replace(PendingOperation),
    /// Operator pending and an operand typed: evaluate the pair, then
    /// continue with `next` as the new pending operator.
    Chain {
        /// Operation to evaluate.
        pending: PendingOperation,
        /// Right-hand operand.
        rhs: f64,
        /// Operator that becomes pending after evaluation.
        next: Operator,
    },
}

/// What a percent key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentResolution {
    /// `pending.operand * rhs / 100`, pending operation discarded.
    OfPending {
        /// Pending operation supplying the base value.
        pending: PendingOperation,
        /// Typed operand.
        rhs: f64,
    },
    /// `value / 100`.
    OfValue(f64),
    /// Operator pending without an operand: nothing to do.
    Ignore,
}

/// Operands of an equals key press that has something to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualsResolution {
    /// Pending operation.
    pub pending: PendingOperation,
    /// Right-hand operand.
    pub rhs: f64,
}

/// Numeric value of the typed operand, or of the display when nothing is
/// being typed.
pub fn current_value(state: &CalculatorState) -> f64 {
    if state.operand().is_empty() {
        state.display_value()
    } else {
        parse_number(state.operand()).unwrap_or(0.0)
    }
}

/// Resolve an operator key press.
pub fn resolve_operator(state: &CalculatorState, operator: Operator) -> OperatorResolution {
    let pending = match (state.mode(), state.pending()) {
        (Mode::Entering, Some(pending)) => pending,
        _ => {
            return OperatorResolution::Start(PendingOperation {
                operand: current_value(state),
                operator,
            })
        }
    };

    if state.operand().is_empty() {
        OperatorResolution::Replace(PendingOperation {
            operand: pending.operand,
            operator,
        })
    } else {
        OperatorResolution::Chain {
            pending,
            rhs: current_value(state),
            next: operator,
        }
    }
}

/// Resolve a percent key press.
pub fn resolve_percent(state: &CalculatorState) -> PercentResolution {
    match state.pending() {
        Some(_) if state.operand().is_empty() => PercentResolution::Ignore,
        Some(pending) => PercentResolution::OfPending {
            pending,
            rhs: current_value(state),
        },
        None => PercentResolution::OfValue(current_value(state)),
    }
}

/// Resolve an equals key press. `None` means equals is a no-op: nothing is
/// pending, or no right-hand operand has been typed.
pub fn resolve_equals(state: &CalculatorState) -> Option<EqualsResolution> {
    if state.mode() != Mode::Entering || state.operand().is_empty() {
        return None;
    }
    state.pending().map(|pending| EqualsResolution {
        pending,
        rhs: current_value(state),
    })
}
