//! Error types for pocketcalc.
//!
//! # Error Hierarchy
//!
//! - [`CalcError`] - arithmetic failures. Recovered inside the engine, which
//!   switches to its error state; never returned from `handle`.
//! - [`AppError`] - top-level error for the binary, wrapping configuration,
//!   logging and terminal failures.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Arithmetic failures detected while resolving an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a right-hand operand of exactly zero.
    #[error("Division by zero")]
    DivideByZero,

    /// The result overflowed to infinity or became NaN.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

/// Top-level application error.
///
/// Domain errors convert via `From`, so the binary can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or stdin/stdout failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// JSON rendering of a snapshot failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_messages_are_readable() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::NonFiniteResult.to_string(),
            "Result is not a finite number"
        );
    }

    #[test]
    fn io_error_converts_into_app_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn config_error_converts_into_app_error() {
        let err: AppError = ConfigError::InvalidValue {
            field: "history_capacity",
            reason: "must be at least 1".to_string(),
        }
        .into();
        assert!(err.to_string().contains("history_capacity"));
    }
}
