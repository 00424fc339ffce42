//! A keypad calculator.
//!
//! The [`calculator`] module holds the state machine that turns button presses
//! into equations. Everything else wires it to a front-end: the [`keypad`]
//! table maps buttons to actions, [`surface`] relays results to the display,
//! history line and error dialog, and [`terminal`] provides those surfaces on
//! a text console.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod surface;
pub mod terminal;
