//! Calculator engine: owns the state and history, dispatches events.

use super::evaluator;
use super::input::{InputAccumulator, DEFAULT_MAX_OPERAND_LENGTH};
use super::operator::{
    current_value, resolve_equals, resolve_operator, resolve_percent, OperatorResolution,
    PercentResolution,
};
use crate::format::{format_number, try_format};
use crate::model::{
    CalcError, CalcEvent, CalculatorState, HistoryEntry, HistoryLog, InputToken, Mode, Operator,
    PendingOperation, Snapshot, DEFAULT_HISTORY_CAPACITY, ZERO_TEXT,
};
use std::fmt;
use tracing::{debug, info, warn};

/// Engine tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum typed operand length (sign excluded).
    pub max_operand_length: usize,
    /// Number of completed calculations retained.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_operand_length: DEFAULT_MAX_OPERAND_LENGTH,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Callback invoked with a fresh snapshot after every handled event.
pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// Immediate-evaluation calculator state machine.
///
/// Every event is handled to completion inside [`handle`](Self::handle);
/// arithmetic failures put the engine in its error state instead of being
/// returned. Observers only ever see owned [`Snapshot`]s.
pub struct CalculatorEngine {
    state: CalculatorState,
    history: HistoryLog,
    accumulator: InputAccumulator,
    observer: Option<Observer>,
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Engine with default limits (12-character operands, 5 history entries).
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with explicit limits.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::idle(),
            history: HistoryLog::with_capacity(config.history_capacity),
            accumulator: InputAccumulator::new(config.max_operand_length),
            observer: None,
        }
    }

    /// Register the change callback, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Handle one event.
    pub fn handle(&mut self, event: CalcEvent) {
        debug!(event = %event, mode = ?self.state.mode, "Handling calculator event");

        if self.state.mode == Mode::ErrorState {
            self.reset();
            if matches!(event, CalcEvent::Clear | CalcEvent::Backspace) {
                self.notify();
                return;
            }
        }

        let outcome = match event {
            CalcEvent::Digit(_) | CalcEvent::DecimalPoint => {
                if let Some(token) = event.input_token() {
                    self.append(token);
                }
                Ok(())
            }
            CalcEvent::Operator(operator) => self.apply_operator(operator),
            CalcEvent::Percent => self.apply_percent(),
            CalcEvent::SignToggle => self.toggle_sign(),
            CalcEvent::Equals => self.apply_equals(),
            CalcEvent::Clear => {
                self.reset();
                Ok(())
            }
            CalcEvent::Backspace => {
                self.backspace();
                Ok(())
            }
        };

        if let Err(error) = outcome {
            warn!(%error, event = %event, "Calculation failed, entering error state");
            self.state = CalculatorState::error();
        }

        self.notify();
    }

    /// Handle several events in order.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = CalcEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Text currently shown. Never empty.
    pub fn current_display(&self) -> &str {
        self.state.display()
    }

    /// Completed calculations, oldest first.
    pub fn current_history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Whether the engine is in the error state.
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Read-only view of the internal state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Owned copy of everything an adapter renders.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.state.display.clone(),
            pending: self.state.pending.map(|p| {
                format!("{} {}", format_number(p.operand), p.operator.symbol())
            }),
            is_error: self.state.is_error(),
            history: self.history.entries().to_vec(),
        }
    }

    fn notify(&mut self) {
        if self.observer.is_some() {
            let snapshot = self.snapshot();
            if let Some(observer) = self.observer.as_mut() {
                observer(&snapshot);
            }
        }
    }

    fn reset(&mut self) {
        self.state = CalculatorState::idle();
    }

    fn append(&mut self, token: InputToken) {
        if self.state.mode == Mode::JustEvaluated {
            self.state.operand.clear();
        }
        let operand = self.accumulator.append(&self.state.operand, token);
        self.state.display = if operand.is_empty() {
            ZERO_TEXT.to_string()
        } else {
            operand.clone()
        };
        self.state.operand = operand;
        self.state.mode = Mode::Entering;
    }

    fn apply_operator(&mut self, operator: Operator) -> Result<(), CalcError> {
        let pending = match resolve_operator(&self.state, operator) {
            OperatorResolution::Start(pending) => {
                self.state.display = try_format(pending.operand)?;
                pending
            }
            OperatorResolution::Replace(pending) => pending,
            OperatorResolution::Chain { pending, rhs, next } => {
                let result = evaluator::apply(pending.operand, rhs, pending.operator)?;
                self.state.display = try_format(result)?;
                debug!(lhs = pending.operand, rhs, result, "Chained operation evaluated");
                PendingOperation {
                    operand: result,
                    operator: next,
                }
            }
        };

        self.state.pending = Some(pending);
        self.state.operand.clear();
        self.state.mode = Mode::Entering;
        Ok(())
    }

    fn apply_percent(&mut self) -> Result<(), CalcError> {
        let result = match resolve_percent(&self.state) {
            PercentResolution::Ignore => return Ok(()),
            PercentResolution::OfPending { pending, rhs } => pending.operand * rhs / 100.0,
            PercentResolution::OfValue(value) => value / 100.0,
        };

        self.state.display = try_format(result)?;
        self.state.pending = None;
        self.state.operand.clear();
        self.state.mode = Mode::JustEvaluated;
        Ok(())
    }

    fn toggle_sign(&mut self) -> Result<(), CalcError> {
        match self.state.mode {
            Mode::JustEvaluated => {
                let value = current_value(&self.state);
                if value != 0.0 {
                    self.state.display = try_format(-value)?;
                }
            }
            // Nothing typed yet: the display still belongs to the pending operand
            Mode::Entering if self.state.operand.is_empty() => {}
            Mode::Entering => {
                let operand = self.accumulator.toggle_sign(&self.state.operand);
                self.state.display = operand.clone();
                self.state.operand = operand;
            }
            Mode::ErrorState => {}
        }
        Ok(())
    }

    fn apply_equals(&mut self) -> Result<(), CalcError> {
        let Some(resolution) = resolve_equals(&self.state) else {
            return Ok(());
        };
        let pending = resolution.pending;

        let result = evaluator::apply(pending.operand, resolution.rhs, pending.operator)?;
        let result_text = try_format(result)?;
        let expression_text = format!(
            "{} {} {}",
            format_number(pending.operand),
            pending.operator.symbol(),
            format_number(resolution.rhs)
        );

        info!(expression = %expression_text, result = %result_text, "Calculation completed");
        self.history
            .push(HistoryEntry::new(expression_text, result_text.clone()));

        self.state.display = result_text;
        self.state.pending = None;
        self.state.operand.clear();
        self.state.mode = Mode::JustEvaluated;
        Ok(())
    }

    fn backspace(&mut self) {
        match self.state.mode {
            Mode::Entering => {
                if self.state.operand.is_empty() {
                    return;
                }
                let operand = self.accumulator.backspace(&self.state.operand);
                self.state.display = if operand.is_empty() {
                    ZERO_TEXT.to_string()
                } else {
                    operand.clone()
                };
                self.state.operand = operand;
            }
            Mode::JustEvaluated | Mode::ErrorState => self.reset(),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
