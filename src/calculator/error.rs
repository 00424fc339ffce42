//! Errors reported by the calculator engine.

use super::number::Number;
use serde::Serialize;
use thiserror::Error;

/// Broad classification of a calculation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    IncompleteEquation,
    DomainError,
    DivisionByZero,
    Overflow,
}

/// A calculation error. `Display` yields the detail line shown to the user.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CalcError {
    /// Operator pressed before any number was entered.
    #[error("Enter a number before choosing an operator")]
    NoOperand,

    /// Equals pressed without a usable operand.
    #[error("Enter another number")]
    IncompleteEquation,

    #[error("The square root of a negative number is imaginary and cannot be computed")]
    NegativeSquareRoot,

    #[error("Enter a valid number to compute the percentage")]
    NegativePercentage,

    #[error("Factorial is only defined for non-negative integers, got {0}")]
    InvalidFactorial(Number),

    #[error("{0} ^ {1} has no real result")]
    UndefinedPower(Number, Number),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("The result exceeded the largest representable number")]
    Overflow,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoOperand | Self::IncompleteEquation => ErrorKind::IncompleteEquation,
            Self::NegativeSquareRoot
            | Self::NegativePercentage
            | Self::InvalidFactorial(_)
            | Self::UndefinedPower(..) => ErrorKind::DomainError,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Overflow => ErrorKind::Overflow,
        }
    }

    /// Short headline for an error dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoOperand => "Nothing entered",
            Self::IncompleteEquation => "Incomplete equation",
            Self::NegativeSquareRoot => "Negative square root",
            Self::NegativePercentage => "Negative percentage",
            Self::InvalidFactorial(_) => "Invalid factorial",
            Self::UndefinedPower(..) => "Undefined power",
            Self::DivisionByZero => "Division by zero",
            Self::Overflow => "Number too large",
        }
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// Flatten into a serializable notification.
    pub fn notification(&self) -> Notification {
        Notification {
            kind: self.kind(),
            title: self.title().to_string(),
            detail: self.detail(),
        }
    }
}

/// What an error presenter receives.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub kind: ErrorKind,
    pub title: String,
    pub detail: String,
}
