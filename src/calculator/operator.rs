//! Operators and their evaluation.

use super::error::CalcError;
use super::number::Number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How operators are rendered inside equations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorLabels {
    /// `5 Add 3`
    #[default]
    Names,
    /// `5 + 3`
    Symbols,
}

/// A calculator operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Percentage: `left * right / 100`.
    Mod,
    Factorial,
    Sqrt,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Pow,
        Self::Mod,
        Self::Factorial,
        Self::Sqrt,
    ];

    /// Unary operators are evaluated as soon as they are selected.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Factorial | Self::Sqrt)
    }

    /// The keypad face for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
            Self::Factorial => "!",
            Self::Sqrt => "sqrt",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Pow => "Pow",
            Self::Mod => "Mod",
            Self::Factorial => "Factorial",
            Self::Sqrt => "Sqrt",
        }
    }

    pub fn label(self, labels: OperatorLabels) -> &'static str {
        match labels {
            OperatorLabels::Names => self.name(),
            OperatorLabels::Symbols => self.symbol(),
        }
    }

    /// Apply a binary operator.
    ///
    /// Unary operators go through [`sqrt`] and [`factorial`] instead; passing
    /// one here is reported as an incomplete equation.
    pub fn apply(self, left: Number, right: Number) -> Result<Number, CalcError> {
        match self {
            Self::Add => integer_or_real(left, right, i64::checked_add, |a, b| a + b),
            Self::Sub => integer_or_real(left, right, i64::checked_sub, |a, b| a - b),
            Self::Mul => integer_or_real(left, right, i64::checked_mul, |a, b| a * b),
            Self::Div => {
                if right.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                finite(left.as_f64() / right.as_f64())
            }
            Self::Pow => power(left, right),
            Self::Mod => finite(left.as_f64() * right.as_f64() / 100.0),
            Self::Factorial | Self::Sqrt => Err(CalcError::IncompleteEquation),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = String;

    /// Parse a keypad face (`+`, `sqrt`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("Unknown operator: {}", s))
    }
}

/// Square root. Always produces a `Real`.
pub fn sqrt(value: Number) -> Result<Number, CalcError> {
    if value.is_negative() {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(Number::Real(value.as_f64().sqrt()))
}

/// Factorial of a non-negative integer value.
pub fn factorial(value: Number) -> Result<Number, CalcError> {
    let n = match value.as_integer() {
        Some(n) if n >= 0 => n,
        _ => return Err(CalcError::InvalidFactorial(value)),
    };

    (2..=n)
        .try_fold(1_i64, |acc, k| acc.checked_mul(k))
        .map(Number::Integer)
        .ok_or(CalcError::Overflow)
}

fn integer_or_real(
    left: Number,
    right: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Number, CalcError> {
    if let (Number::Integer(a), Number::Integer(b)) = (left, right)
        && let Some(result) = int_op(a, b)
    {
        return Ok(Number::Integer(result));
    }
    finite(real_op(left.as_f64(), right.as_f64()))
}

fn power(base: Number, exponent: Number) -> Result<Number, CalcError> {
    let (b, e) = (base.as_f64(), exponent.as_f64());
    if base.is_zero() && exponent.is_negative() {
        return Err(CalcError::UndefinedPower(base, exponent));
    }

    let result = b.powf(e);
    if result.is_nan() {
        return Err(CalcError::UndefinedPower(base, exponent));
    }
    finite(result)
}

fn finite(value: f64) -> Result<Number, CalcError> {
    if value.is_finite() {
        Ok(Number::Real(value))
    } else {
        Err(CalcError::Overflow)
    }
}
