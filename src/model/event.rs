//! Calculator input events.
//!
//! These represent what the user asked for, independent of which key or
//! button produced it. Mapping physical keys to events is handled by
//! `KeyBindings`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single decimal digit (0-9).
///
/// Only built through [`Digit::new`] or [`Digit::from_char`], so the value
/// is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Smart constructor: validates the value is in `0..=9`.
    pub fn new(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit(value))
        }
    }

    /// Parse an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as an ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for digit values outside `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Digit out of range: {0} (expected 0-9)")]
pub struct InvalidDigit(pub u8);

/// Binary operators supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division. Fails on a zero right-hand side.
    Div,
}

impl Operator {
    /// Symbol used when rendering expressions (history, pending preview).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Tokens accepted by the input accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    /// A digit key.
    Digit(Digit),
    /// The decimal point key.
    DecimalPoint,
}

/// Every event the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcEvent {
    /// Digit key (0-9).
    Digit(Digit),
    /// Decimal point key.
    DecimalPoint,
    /// Binary operator key.
    Operator(Operator),
    /// Percent key.
    Percent,
    /// Sign toggle (±) key.
    SignToggle,
    /// Equals / Enter.
    Equals,
    /// Clear / Escape.
    Clear,
    /// Delete the last typed character.
    Backspace,
}

impl CalcEvent {
    /// Build a digit event from a numeric value.
    pub fn digit(value: u8) -> Result<Self, InvalidDigit> {
        Digit::new(value).map(Self::Digit)
    }

    /// The accumulator token carried by this event, if any.
    pub fn input_token(self) -> Option<InputToken> {
        match self {
            Self::Digit(d) => Some(InputToken::Digit(d)),
            Self::DecimalPoint => Some(InputToken::DecimalPoint),
            _ => None,
        }
    }
}

/// Error for event names that do not match any known event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown calculator event name: {0:?}")]
pub struct UnknownEventName(pub String);

impl FromStr for CalcEvent {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let event = match name.as_str() {
            "decimal_point" | "decimal" => Self::DecimalPoint,
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Sub),
            "multiply" => Self::Operator(Operator::Mul),
            "divide" => Self::Operator(Operator::Div),
            "percent" => Self::Percent,
            "sign_toggle" => Self::SignToggle,
            "equals" => Self::Equals,
            "clear" => Self::Clear,
            "backspace" => Self::Backspace,
            other => {
                let digit = other
                    .strip_prefix("digit_")
                    .and_then(|d| d.parse::<u8>().ok())
                    .and_then(|d| Digit::new(d).ok());
                match digit {
                    Some(d) => Self::Digit(d),
                    None => return Err(UnknownEventName(s.to_string())),
                }
            }
        };
        Ok(event)
    }
}

impl fmt::Display for CalcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit_{}", d),
            Self::DecimalPoint => f.write_str("decimal_point"),
            Self::Operator(op) => f.write_str(op.name()),
            Self::Percent => f.write_str("percent"),
            Self::SignToggle => f.write_str("sign_toggle"),
            Self::Equals => f.write_str("equals"),
            Self::Clear => f.write_str("clear"),
            Self::Backspace => f.write_str("backspace"),
        }
    }
}
