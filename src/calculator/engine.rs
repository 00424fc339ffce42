//! The calculation state machine behind the keypad.
//!
//! The engine owns the operands, the latched operator and the text being
//! typed. Each entry point runs to completion and returns an [`Outcome`]
//! describing what the display, the history line and the error presenter
//! should show next.

use super::error::CalcError;
use super::number::{Number, convert_to_number, is_valid_number};
use super::operator::{Operator, OperatorLabels, factorial, sqrt};
use tracing::{debug, warn};

/// Default history text before anything has been calculated.
pub const DEFAULT_PLACEHOLDER: &str = "Your equation";

/// A single user intent, already decoupled from any particular button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineAction {
    /// Append a digit, a dot, or a pre-validated numeric chunk.
    Insert(String),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    InvertSign,
}

/// Coarse position in the entry cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Empty,
    LeftEntered,
    OperatorLatched,
    RightEntered,
    Evaluated,
    Errored,
}

/// What the surfaces should show after an action.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// New display text.
    pub input: String,
    /// New history line.
    pub history: String,
    /// Error to present, if the action failed.
    pub error: Option<CalcError>,
}

/// The calculator state machine.
#[derive(Debug)]
pub struct CalculatorEngine {
    left: Option<Number>,
    operator: Option<Operator>,
    right: Option<Number>,
    equation: String,
    history: String,
    input: String,
    placeholder: String,
    labels: OperatorLabels,
    evaluated: bool,
    failed: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_PLACEHOLDER, OperatorLabels::default())
    }

    /// Create an engine with a custom history placeholder and operator labels.
    pub fn with_settings(placeholder: impl Into<String>, labels: OperatorLabels) -> Self {
        let placeholder = placeholder.into();
        Self {
            left: None,
            operator: None,
            right: None,
            equation: placeholder.clone(),
            history: placeholder.clone(),
            input: String::new(),
            placeholder,
            labels,
            evaluated: false,
            failed: false,
        }
    }

    pub fn left(&self) -> Option<Number> {
        self.left
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn right(&self) -> Option<Number> {
        self.right
    }

    /// The text currently being typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn state(&self) -> State {
        match self.left {
            None if !self.input.is_empty() => State::LeftEntered,
            None if self.failed => State::Errored,
            None => State::Empty,
            Some(_) if !self.input.is_empty() => State::RightEntered,
            Some(_) if self.evaluated => State::Evaluated,
            Some(_) => State::OperatorLatched,
        }
    }

    /// Dispatch an action to the matching entry point.
    pub fn apply(&mut self, action: EngineAction) -> Outcome {
        debug!(?action, "Applying action");

        let outcome = match action {
            EngineAction::Insert(ref token) => self.insert(token),
            EngineAction::Operator(op) => self.select_operator(op),
            EngineAction::Equals => self.equals(),
            EngineAction::Clear => self.clear(),
            EngineAction::Backspace => self.backspace(),
            EngineAction::InvertSign => self.invert_sign(),
        };

        debug!(
            state = ?self.state(),
            left = ?self.left,
            operator = ?self.operator,
            input = %self.input,
            "Action applied"
        );
        outcome
    }

    /// Append a token to the display if the result is still a valid number.
    pub fn insert(&mut self, token: &str) -> Outcome {
        let candidate = format!("{}{}", self.input, token);
        if is_valid_number(&candidate) {
            self.input = candidate;
        } else {
            debug!(token, input = %self.input, "Ignoring token that breaks the number");
        }
        self.outcome(None)
    }

    /// Latch an operator, evaluating unary operators immediately.
    pub fn select_operator(&mut self, op: Operator) -> Outcome {
        let typed = convert_to_number(&self.input);
        self.input.clear();

        let left = match (self.left, typed) {
            (Some(left), _) => left,
            (None, Some(typed)) => typed,
            (None, None) => return self.reject(CalcError::NoOperand),
        };

        self.left = Some(left);
        self.operator = Some(op);
        self.right = None;
        self.failed = false;

        match op {
            Operator::Sqrt => match sqrt(left) {
                Ok(result) => {
                    self.set_equation(format!("sqrt {} = {}", left, result));
                    self.left = Some(result);
                    self.evaluated = true;
                    self.outcome(None)
                }
                Err(err) => self.reject(err),
            },
            Operator::Factorial => match factorial(left) {
                Ok(result) => {
                    self.set_equation(format!("{}! = {}", left, result));
                    self.left = Some(result);
                    self.evaluated = true;
                    self.outcome(None)
                }
                Err(CalcError::Overflow) => {
                    self.equation = format!("{}!", left);
                    self.fail(CalcError::Overflow)
                }
                Err(err) => self.reject(err),
            },
            _ => {
                self.set_equation(format!("{} {} ??", left, op.label(self.labels)));
                self.evaluated = false;
                self.outcome(None)
            }
        }
    }

    /// Evaluate the latched equation.
    pub fn equals(&mut self) -> Outcome {
        let Some(left) = self.left else {
            return self.reject(CalcError::IncompleteEquation);
        };

        // Unary operators were evaluated when latched; this only confirms.
        if let Some(op) = self.operator
            && op.is_unary()
        {
            self.right = None;
            self.input.clear();
            self.history = self.equation.clone();
            return self.outcome(None);
        }

        let (Some(op), Some(right)) = (self.operator, convert_to_number(&self.input)) else {
            return self.reject(CalcError::IncompleteEquation);
        };

        if op == Operator::Mod {
            if left.is_negative() {
                return self.reject(CalcError::NegativePercentage);
            }
            self.equation = format!("({} * {})/100", left, right);
        } else {
            self.equation = format!("{} {} {}", left, op.label(self.labels), right);
        }
        self.right = Some(right);

        match op.apply(left, right) {
            Ok(result) => {
                self.input.clear();
                self.history = format!("{} = {}", self.equation, result);
                self.left = Some(result);
                self.right = None;
                self.evaluated = true;
                self.outcome(None)
            }
            Err(err) => self.fail(err),
        }
    }

    /// Negate the number being typed.
    pub fn invert_sign(&mut self) -> Outcome {
        if let Some(number) = convert_to_number(&self.input) {
            self.input = number.negate().to_string();
        }
        self.outcome(None)
    }

    pub fn backspace(&mut self) -> Outcome {
        self.input.pop();
        self.outcome(None)
    }

    /// Reset everything to the initial state.
    pub fn clear(&mut self) -> Outcome {
        self.reset();
        self.outcome(None)
    }

    fn reset(&mut self) {
        self.left = None;
        self.operator = None;
        self.right = None;
        self.set_equation(self.placeholder.clone());
        self.input.clear();
        self.evaluated = false;
        self.failed = false;
    }

    fn set_equation(&mut self, equation: String) {
        self.history = equation.clone();
        self.equation = equation;
    }

    /// Report an error and start over from an empty state.
    fn reject(&mut self, err: CalcError) -> Outcome {
        warn!(kind = ?err.kind(), "{}: {}", err.title(), err);
        self.reset();
        self.outcome(Some(err))
    }

    /// Report a failed evaluation, keeping the attempted equation visible.
    fn fail(&mut self, err: CalcError) -> Outcome {
        warn!(kind = ?err.kind(), equation = %self.equation, "{}: {}", err.title(), err);
        self.input.clear();
        self.history = format!("{} = error", self.equation);
        self.left = None;
        self.operator = None;
        self.right = None;
        self.evaluated = false;
        self.failed = true;
        self.outcome(Some(err))
    }

    fn outcome(&self, error: Option<CalcError>) -> Outcome {
        Outcome {
            input: self.input.clone(),
            history: self.history.clone(),
            error,
        }
    }
}
