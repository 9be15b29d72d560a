//! Domain failures of the standard functions
//!
//! A standard function never panics and never unwinds into generated code.
//! When an operation has no meaningful result (division by zero, a nibble
//! that is not a decimal digit, a negative string length, ...) it returns
//! a [`Fault`] instead, and the enable gate (see [`crate::enable`]) turns
//! that into the type's init value plus `ENO = FALSE`.
//!
//! Faults are local to a single call: nothing is stored, nothing
//! propagates past the return value and the output-enable flag.

use thiserror::Error;

/// Why a standard function could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// DIV (numeric or TIME) with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// BCD_TO_* input with a nibble outside 0..=9
    #[error("invalid BCD digit in 16#{0:x}")]
    InvalidBcd(u64),

    /// A string length, position or similar count was negative
    #[error("negative {0} argument")]
    NegativeArgument(&'static str),

    /// MUX selector does not name one of the inputs
    #[error("selector {selector} out of range for {count} inputs")]
    SelectorOutOfRange { selector: i128, count: usize },

    /// An extensible function was called with no operands at all
    #[error("no operands supplied")]
    MissingOperand,

    /// STRING_TO_* input is not a literal of the target type
    #[error("not a valid {0} literal")]
    Unparsable(&'static str),
}

/// Result of a standard function before EN/ENO gating.
pub type Outcome<T> = Result<T, Fault>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_messages() {
        assert_eq!(Fault::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Fault::InvalidBcd(0x1a).to_string(),
            "invalid BCD digit in 16#1a"
        );
        assert_eq!(
            Fault::NegativeArgument("length").to_string(),
            "negative length argument"
        );
        assert_eq!(
            Fault::SelectorOutOfRange {
                selector: 5,
                count: 3
            }
            .to_string(),
            "selector 5 out of range for 3 inputs"
        );
        assert_eq!(Fault::Unparsable("TIME").to_string(), "not a valid TIME literal");
    }

    #[test]
    fn test_outcome_propagates_with_question_mark() {
        fn inner(fail: bool) -> Outcome<i32> {
            if fail {
                Err(Fault::MissingOperand)
            } else {
                Ok(7)
            }
        }
        fn outer(fail: bool) -> Outcome<i32> {
            Ok(inner(fail)? * 2)
        }
        assert_eq!(outer(false), Ok(14));
        assert_eq!(outer(true), Err(Fault::MissingOperand));
    }
}
