//! The surfaces the engine talks to, and the dispatcher relaying outcomes.
//!
//! A front-end provides three collaborators: the display the user types into,
//! the history line above it, and something that can show an error dialog.
//! [`Dispatcher`] turns button labels into engine actions and pushes each
//! [`Outcome`] out to those collaborators.

use crate::calculator::{CalculatorEngine, EngineAction, Outcome};
use crate::keypad;
use thiserror::Error;
use tracing::debug;

/// The single-line display holding the number being typed.
pub trait InputSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn clear(&mut self);
    fn insert(&mut self, text: &str);
    fn backspace(&mut self);
    fn request_focus(&mut self);
}

/// The equation readout above the display.
pub trait HistorySurface {
    fn set_text(&mut self, text: &str);
}

/// The button a user dismissed an error dialog with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Ok,
    Cancel,
}

/// Shows a blocking error notification.
pub trait ErrorPresenter {
    fn show(&mut self, title: &str, detail: &str) -> Choice;
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown button: {0}")]
pub struct UnknownButton(pub String);

/// Routes button presses through the engine and onto the surfaces.
pub struct Dispatcher<I, H, E> {
    engine: CalculatorEngine,
    input: I,
    history: H,
    presenter: E,
}

impl<I, H, E> Dispatcher<I, H, E>
where
    I: InputSurface,
    H: HistorySurface,
    E: ErrorPresenter,
{
    pub fn new(engine: CalculatorEngine, input: I, history: H, presenter: E) -> Self {
        let mut dispatcher = Self {
            engine,
            input,
            history,
            presenter,
        };
        dispatcher.history.set_text(dispatcher.engine.history());
        dispatcher.input.request_focus();
        dispatcher
    }

    /// Handle a press of the button with the given label.
    pub fn press(&mut self, label: &str) -> Result<Outcome, UnknownButton> {
        let action = keypad::action_for(label).ok_or_else(|| UnknownButton(label.to_string()))?;
        Ok(self.dispatch(action))
    }

    pub fn dispatch(&mut self, action: EngineAction) -> Outcome {
        let outcome = self.engine.apply(action);
        self.relay(&outcome);
        outcome
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn presenter(&self) -> &E {
        &self.presenter
    }

    fn relay(&mut self, outcome: &Outcome) {
        self.sync_input(&outcome.input);
        self.history.set_text(&outcome.history);

        if let Some(err) = &outcome.error {
            // Ok and Cancel are treated the same.
            let choice = self.presenter.show(err.title(), &err.detail());
            debug!(?choice, "Error dismissed");
        }

        self.input.request_focus();
    }

    /// Apply the smallest edit that brings the display to `target`.
    fn sync_input(&mut self, target: &str) {
        let current = self.input.text();
        if current == target {
            return;
        }

        if target.is_empty() {
            self.input.clear();
        } else if let Some(suffix) = target.strip_prefix(current.as_str()) {
            self.input.insert(suffix);
        } else if current.len() == target.len() + 1 && current.starts_with(target) {
            self.input.backspace();
        } else {
            self.input.set_text(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CalcError, DEFAULT_PLACEHOLDER};

    #[derive(Default)]
    struct FakeInput {
        text: String,
        calls: Vec<&'static str>,
        focus_requests: usize,
    }

    impl InputSurface for FakeInput {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.calls.push("set_text");
            self.text = text.to_string();
        }

        fn clear(&mut self) {
            self.calls.push("clear");
            self.text.clear();
        }

        fn insert(&mut self, text: &str) {
            self.calls.push("insert");
            self.text.push_str(text);
        }

        fn backspace(&mut self) {
            self.calls.push("backspace");
            self.text.pop();
        }

        fn request_focus(&mut self) {
            self.focus_requests += 1;
        }
    }

    #[derive(Default)]
    struct FakeHistory(String);

    impl HistorySurface for FakeHistory {
        fn set_text(&mut self, text: &str) {
            self.0 = text.to_string();
        }
    }

    struct FakePresenter {
        shown: Vec<(String, String)>,
        answer: Choice,
    }

    impl ErrorPresenter for FakePresenter {
        fn show(&mut self, title: &str, detail: &str) -> Choice {
            self.shown.push((title.to_string(), detail.to_string()));
            self.answer
        }
    }

    type FakeDispatcher = Dispatcher<FakeInput, FakeHistory, FakePresenter>;

    fn dispatcher(answer: Choice) -> FakeDispatcher {
        Dispatcher::new(
            CalculatorEngine::new(),
            FakeInput::default(),
            FakeHistory::default(),
            FakePresenter {
                shown: Vec::new(),
                answer,
            },
        )
    }

    fn press_all(dispatcher: &mut FakeDispatcher, labels: &[&str]) {
        for label in labels {
            dispatcher.press(label).unwrap();
        }
    }

    #[test]
    fn test_initial_history() {
        let d = dispatcher(Choice::Ok);
        assert_eq!(d.history().0, DEFAULT_PLACEHOLDER);
        assert_eq!(d.input().focus_requests, 1);
    }

    #[test]
    fn test_typing_uses_insert() {
        let mut d = dispatcher(Choice::Ok);
        press_all(&mut d, &["1", "2"]);
        assert_eq!(d.input().text, "12");
        assert_eq!(d.input().calls, vec!["insert", "insert"]);
    }

    #[test]
    fn test_backspace_and_invert_edit_display() {
        let mut d = dispatcher(Choice::Ok);
        press_all(&mut d, &["1", "2", "D", "N"]);
        assert_eq!(d.input().text, "-1");
        assert_eq!(d.input().calls, vec!["insert", "insert", "backspace", "set_text"]);
    }

    #[test]
    fn test_equation_reaches_history() {
        let mut d = dispatcher(Choice::Ok);
        press_all(&mut d, &["5", "+", "3"]);
        assert_eq!(d.history().0, "5 Add ??");
        assert_eq!(d.input().text, "3");

        let outcome = d.press("=").unwrap();
        assert_eq!(d.history().0, "5 Add 3 = 8");
        assert_eq!(outcome.history, "5 Add 3 = 8");
        assert_eq!(d.input().text, "");
        assert_eq!(d.input().calls.last(), Some(&"clear"));
    }

    #[test]
    fn test_errors_are_presented_once() {
        let mut d = dispatcher(Choice::Ok);
        press_all(&mut d, &["5", "/", "0", "="]);
        assert_eq!(d.presenter().shown.len(), 1);
        assert_eq!(
            d.presenter().shown[0],
            ("Division by zero".to_string(), "Cannot divide by zero".to_string())
        );
        assert_eq!(d.history().0, "5 Div 0 = error");
    }

    #[test]
    fn test_cancel_behaves_like_ok() {
        let mut with_ok = dispatcher(Choice::Ok);
        let mut with_cancel = dispatcher(Choice::Cancel);
        for d in [&mut with_ok, &mut with_cancel] {
            press_all(d, &["4", "N", "sqrt"]);
        }
        assert_eq!(with_ok.history().0, with_cancel.history().0);
        assert_eq!(with_ok.engine().state(), with_cancel.engine().state());
        assert_eq!(with_cancel.engine().left(), None);
        assert_eq!(
            with_cancel.presenter().shown[0].0,
            CalcError::NegativeSquareRoot.title()
        );
    }

    #[test]
    fn test_unknown_button() {
        let mut d = dispatcher(Choice::Ok);
        assert_eq!(d.press("x"), Err(UnknownButton("x".to_string())));
        assert!(d.presenter().shown.is_empty());
    }
}
