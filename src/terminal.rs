//! Terminal front-end: surfaces backed by plain text, an interactive loop,
//! and a one-shot script mode.

use crate::calculator::{CalculatorEngine, Notification, copy_to_clipboard};
use crate::keypad;
use crate::surface::{Choice, Dispatcher, ErrorPresenter, HistorySurface, InputSurface};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// The display line.
#[derive(Debug, Default)]
pub struct TerminalInput {
    text: String,
}

impl InputSurface for TerminalInput {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn clear(&mut self) {
        self.text.clear();
    }

    fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn backspace(&mut self) {
        self.text.pop();
    }

    // A terminal has a single input line; there is nothing to focus.
    fn request_focus(&mut self) {}
}

/// The history line.
#[derive(Debug, Default)]
pub struct TerminalHistory {
    text: String,
}

impl TerminalHistory {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl HistorySurface for TerminalHistory {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Prints errors as `title: detail` lines.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ErrorPresenter for TerminalPresenter<W> {
    fn show(&mut self, title: &str, detail: &str) -> Choice {
        if let Err(e) = writeln!(self.out, "{}: {}", title, detail) {
            tracing::error!("Failed to print error: {}", e);
        }
        Choice::Ok
    }
}

pub type TerminalDispatcher<W> = Dispatcher<TerminalInput, TerminalHistory, TerminalPresenter<W>>;

pub fn dispatcher<W: Write>(engine: CalculatorEngine, errors: W) -> TerminalDispatcher<W> {
    Dispatcher::new(
        engine,
        TerminalInput::default(),
        TerminalHistory::default(),
        TerminalPresenter::new(errors),
    )
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct KeyReport<'a> {
    key: &'a str,
    input: &'a str,
    history: &'a str,
    error: Option<Notification>,
}

/// Press each key in order and print the result.
///
/// With `json` set, prints one JSON object per key instead of the final screen.
pub fn run_script<W: Write, E: Write>(
    engine: CalculatorEngine,
    keys: &[String],
    json: bool,
    mut out: W,
    errors: E,
) -> Result<()> {
    let mut dispatcher = dispatcher(engine, errors);

    for key in keys {
        let outcome = dispatcher.press(key)?;
        if json {
            let report = KeyReport {
                key,
                input: &outcome.input,
                history: &outcome.history,
                error: outcome.error.as_ref().map(|e| e.notification()),
            };
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    if !json {
        write_screen(&mut out, &dispatcher)?;
    }
    Ok(())
}

/// Read button labels line by line until EOF or `:quit`.
pub fn run_interactive<R: BufRead, W: Write, E: Write>(
    engine: CalculatorEngine,
    reader: R,
    mut out: W,
    errors: E,
) -> Result<()> {
    let mut dispatcher = dispatcher(engine, errors);

    write!(out, "{}", keypad::render())?;
    write_screen(&mut out, &dispatcher)?;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":keypad" => {
                write!(out, "{}", keypad::render())?;
                continue;
            }
            ":copy" => {
                match copy_to_clipboard(dispatcher.history().text()) {
                    Ok(copied) => writeln!(out, "Copied {}", copied)?,
                    Err(e) => {
                        tracing::error!("{:#}", e);
                        writeln!(out, "{:#}", e)?;
                    }
                }
                continue;
            }
            _ => {}
        }

        for label in line.split_whitespace() {
            if let Err(e) = dispatcher.press(label) {
                writeln!(out, "{}", e)?;
            }
        }
        write_screen(&mut out, &dispatcher)?;
    }

    Ok(())
}

/// Run the interactive loop on stdin/stdout.
pub fn run_stdio(engine: CalculatorEngine) -> Result<()> {
    let stdin = io::stdin();
    run_interactive(engine, stdin.lock(), io::stdout().lock(), io::stderr())
}

fn write_screen<W: Write, E: Write>(out: &mut W, dispatcher: &TerminalDispatcher<E>) -> Result<()> {
    writeln!(out, "{}", dispatcher.history().text())?;
    writeln!(out, "> {}", dispatcher.input().text())?;
    out.flush()?;
    Ok(())
}
