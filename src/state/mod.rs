//! Calculator state machine (pure).
//!
//! All state transitions are synchronous and testable without a terminal.

pub mod engine;
pub mod evaluator;
pub mod input;
pub mod operator;

// Re-export for convenience
pub use engine::{CalculatorEngine, EngineConfig, Observer};
pub use input::{InputAccumulator, DEFAULT_MAX_OPERAND_LENGTH};
pub use operator::{
    resolve_equals, resolve_operator, resolve_percent, EqualsResolution, OperatorResolution,
    PercentResolution,
};
