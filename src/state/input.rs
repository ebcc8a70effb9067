//! Operand text accumulation.
//!
//! Pure functions that build the operand being typed from digit and
//! decimal-point tokens. Works on raw text only; no numeric conversion.

use crate::model::InputToken;

/// Default maximum operand length (sign excluded).
pub const DEFAULT_MAX_OPERAND_LENGTH: usize = 12;

/// Builds operand text while enforcing leading-zero, decimal-point and
/// length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAccumulator {
    max_length: usize,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OPERAND_LENGTH)
    }
}

impl InputAccumulator {
    /// Create an accumulator. A maximum length of zero is raised to one.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length: max_length.max(1),
        }
    }

    /// Maximum operand length, not counting a leading minus sign.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Append a token to `current` and return the new operand text.
    ///
    /// - A leading `0` not followed by `.` is dropped (`"0"` + `5` → `"5"`).
    /// - `.` on empty text yields `"0."`; a second `.` is ignored.
    /// - Tokens that would exceed the maximum length are ignored.
    ///
    /// A leading `-` (from a sign toggle) is kept and not counted.
    pub fn append(&self, current: &str, token: InputToken) -> String {
        let (sign, magnitude) = split_sign(current);

        let next = match token {
            InputToken::DecimalPoint => {
                if magnitude.contains('.') {
                    return current.to_string();
                }
                if magnitude.is_empty() {
                    "0.".to_string()
                } else {
                    format!("{}.", magnitude)
                }
            }
            InputToken::Digit(digit) => {
                let mut text = String::with_capacity(magnitude.len() + 1);
                text.push_str(magnitude);
                text.push(digit.as_char());
                if text.len() > 1 && text.starts_with('0') && !text[1..].starts_with('.') {
                    text.remove(0);
                }
                text
            }
        };

        if next.len() > self.max_length {
            return current.to_string();
        }

        format!("{}{}", sign, next)
    }

    /// Remove the last character. A lone `-` left behind is removed too.
    pub fn backspace(&self, current: &str) -> String {
        let mut text = current.to_string();
        text.pop();
        if text == "-" {
            text.clear();
        }
        text
    }

    /// Flip the sign of the operand text. Empty text stays empty.
    pub fn toggle_sign(&self, current: &str) -> String {
        match current.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None if current.is_empty() => String::new(),
            None => format!("-{}", current),
        }
    }
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    }
}
