//! Calculator core.
//!
//! This module provides:
//! - Number validation and conversion for the display text
//! - Operator evaluation with integer/real promotion
//! - The keypad state machine that turns button presses into equations
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod error;
mod number;
mod operator;

pub use clipboard::{copy_to_clipboard, result_of};
pub use engine::{CalculatorEngine, DEFAULT_PLACEHOLDER, EngineAction, Outcome, State};
pub use error::{CalcError, ErrorKind, Notification};
pub use number::{Number, convert_to_number, is_valid_number};
pub use operator::{Operator, OperatorLabels, factorial, sqrt};
