//! Operand values and the number grammar of the display.
//!
//! The display only ever holds text matching [`is_valid_number`]. Converting
//! that text yields a [`Number`], which keeps integers exact so that factorial
//! stays meaningful.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Optional leading minus, digits with at most one dot, at least one digit.
    static ref NUMBER: Regex = Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

/// Check if text is a complete number the engine can convert.
///
/// This is the same grammar enforced while typing, so anything the display
/// accepts can be converted.
pub fn is_valid_number(text: &str) -> bool {
    NUMBER.is_match(text)
}

/// Convert display text into a [`Number`].
///
/// Returns `Integer` when the value has no fractional part and fits in `i64`,
/// otherwise `Real`. Returns `None` if the text is not a valid number.
pub fn convert_to_number(text: &str) -> Option<Number> {
    if !is_valid_number(text) {
        return None;
    }

    let value: f64 = text.parse().ok()?;
    if value.fract() == 0.0 {
        // Parse the integral digits directly so large values stay exact.
        let integral = text.split('.').next().unwrap_or(text);
        if let Ok(int) = integral.parse::<i64>() {
            return Some(Number::Integer(int));
        }
        if integral == "-" || integral.is_empty() {
            return Some(Number::Integer(0));
        }
    }

    Some(Number::Real(value))
}

/// A numeric operand.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(x) => x,
        }
    }

    /// The exact integer value, if there is one.
    ///
    /// Integral reals such as `3.0` (the result of `sqrt 9`) count as integers
    /// as long as they fit in `i64`.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(x) if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 => {
                Some(x as i64)
            }
            Self::Real(_) => None,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Real(x) => x < 0.0,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(x) => x == 0.0,
        }
    }

    /// Negate, promoting to `Real` when `-i64::MIN` does not fit.
    pub fn negate(self) -> Self {
        match self {
            Self::Integer(n) => n
                .checked_neg()
                .map(Self::Integer)
                .unwrap_or(Self::Real(-(n as f64))),
            Self::Real(x) => Self::Real(-x),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(n), Self::Real(x)) | (Self::Real(x), Self::Integer(n)) => {
                Self::Real(x).as_integer() == Some(n)
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Real(x) => {
                // Display never uses exponent notation, so the output is
                // always something the display would accept.
                let text = format!("{}", x);
                if x.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_number("0"));
        assert!(is_valid_number("42"));
        assert!(is_valid_number("-42"));
        assert!(is_valid_number("3.14"));
        assert!(is_valid_number("3."));
        assert!(is_valid_number(".5"));
        assert!(is_valid_number("-0.5"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("-"));
        assert!(!is_valid_number("."));
        assert!(!is_valid_number("-."));
        assert!(!is_valid_number("1.2.3"));
        assert!(!is_valid_number("1e5"));
        assert!(!is_valid_number("inf"));
        assert!(!is_valid_number(" 1"));
        assert!(!is_valid_number("--1"));
    }

    #[test]
    fn test_convert_integers() {
        assert!(matches!(convert_to_number("5"), Some(Number::Integer(5))));
        assert!(matches!(convert_to_number("-12"), Some(Number::Integer(-12))));
        assert!(matches!(convert_to_number("5.0"), Some(Number::Integer(5))));
        assert!(matches!(convert_to_number("7."), Some(Number::Integer(7))));
        assert!(matches!(convert_to_number("-0"), Some(Number::Integer(0))));
        assert!(matches!(
            convert_to_number("9223372036854775807"),
            Some(Number::Integer(i64::MAX))
        ));
    }

    #[test]
    fn test_convert_reals() {
        assert!(matches!(convert_to_number("2.5"), Some(Number::Real(x)) if x == 2.5));
        assert!(matches!(convert_to_number(".5"), Some(Number::Real(x)) if x == 0.5));
        assert!(matches!(
            convert_to_number("99999999999999999999"),
            Some(Number::Real(_))
        ));
        assert!(convert_to_number("abc").is_none());
        assert!(convert_to_number("").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(8).to_string(), "8");
        assert_eq!(Number::Integer(-3).to_string(), "-3");
        assert_eq!(Number::Real(3.0).to_string(), "3.0");
        assert_eq!(Number::Real(0.15).to_string(), "0.15");
        assert_eq!(Number::Real(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Real(1e20).to_string(), "100000000000000000000.0");
    }

    #[test]
    fn test_display_round_trips() {
        for n in [0_i64, 1, -1, 42, i64::MAX, i64::MIN] {
            let number = Number::Integer(n);
            assert_eq!(convert_to_number(&number.to_string()), Some(number));
        }
        for x in [0.5, -2.25, 3.0, 0.1, 1e20, 1e-7, 123.456] {
            let number = Number::Real(x);
            assert_eq!(convert_to_number(&number.to_string()), Some(number));
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Number::Integer(3), Number::Real(3.0));
        assert_ne!(Number::Integer(3), Number::Real(3.5));
        assert_eq!(Number::Real(3.0).as_integer(), Some(3));
        assert_eq!(Number::Real(3.5).as_integer(), None);
    }

    #[test]
    fn test_negate() {
        assert_eq!(Number::Integer(5).negate(), Number::Integer(-5));
        assert_eq!(Number::Real(0.5).negate(), Number::Real(-0.5));
        assert!(matches!(Number::Integer(i64::MIN).negate(), Number::Real(_)));
    }
}
