//! Engine errors.

use thiserror::Error;

/// Every failure is recoverable; the caller decides how to present it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("division by zero")]
    DivideByZero,
    /// `during_equals` is set when the failure came from resolving a pending
    /// operation; the engine clears itself in that case.
    #[error("operand is not a number")]
    InvalidOperand { during_equals: bool },
    #[error("square root of a negative number")]
    NegativeRadicand,
    #[error("result is not a finite number")]
    Overflow,
}

impl EngineError {
    /// Text for the alert dialog.
    pub fn alert_message(&self) -> &'static str {
        match self {
            EngineError::DivideByZero => "Cannot divide by zero!",
            EngineError::InvalidOperand { during_equals: true } => "Invalid calculation!",
            EngineError::InvalidOperand { during_equals: false } => "Invalid input!",
            EngineError::NegativeRadicand => "Cannot calculate square root of negative number!",
            EngineError::Overflow => "Result is too large!",
        }
    }
}
