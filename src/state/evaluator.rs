//! Binary operator application (pure, no rounding).

use crate::model::{CalcError, Operator};

/// Apply `op` to `lhs` and `rhs`.
///
/// Division by exactly zero (either sign) is the only failure. Overflow to
/// infinity is returned as-is and caught when the result is formatted.
pub fn apply(lhs: f64, rhs: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs == 0.0 => Err(CalcError::DivideByZero),
        Operator::Div => Ok(lhs / rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_each_operator() {
        assert_eq!(apply(5.0, 3.0, Operator::Add), Ok(8.0));
        assert_eq!(apply(5.0, 3.0, Operator::Sub), Ok(2.0));
        assert_eq!(apply(5.0, 3.0, Operator::Mul), Ok(15.0));
        assert_eq!(apply(6.0, 3.0, Operator::Div), Ok(2.0));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(apply(1.0, 0.0, Operator::Div), Err(CalcError::DivideByZero));
        assert_eq!(apply(1.0, -0.0, Operator::Div), Err(CalcError::DivideByZero));
    }

    #[test]
    fn zero_divided_by_nonzero_is_fine() {
        assert_eq!(apply(0.0, 4.0, Operator::Div), Ok(0.0));
    }

    #[test]
    fn no_rounding_is_applied() {
        let sum = apply(0.1, 0.2, Operator::Add).unwrap();
        assert_ne!(sum, 0.3);
    }

    #[test]
    fn overflow_is_returned_not_reported() {
        let product = apply(f64::MAX, 2.0, Operator::Mul).unwrap();
        assert!(product.is_infinite());
    }
}
