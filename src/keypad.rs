//! The keypad layout and the table binding each button to an engine action.

use crate::calculator::{EngineAction, Operator};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Button labels row by row. An empty label is a cell covered by its
/// right-hand neighbour (the wide `0` key).
pub const GRID: [[&str; 4]; 6] = [
    ["c", "D", "^", "/"],
    ["N", "sqrt", "%", "!"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["", "0", ".", "="],
];

lazy_static! {
    static ref ACTIONS: HashMap<&'static str, EngineAction> = {
        let mut table = HashMap::new();
        table.insert("c", EngineAction::Clear);
        table.insert("D", EngineAction::Backspace);
        table.insert("N", EngineAction::InvertSign);
        table.insert("=", EngineAction::Equals);
        table.insert(".", EngineAction::Insert(".".to_string()));
        for digit in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"] {
            table.insert(digit, EngineAction::Insert(digit.to_string()));
        }
        for op in Operator::ALL {
            table.insert(op.symbol(), EngineAction::Operator(op));
        }
        table
    };
}

/// Look up the action bound to a button label.
pub fn action_for(label: &str) -> Option<EngineAction> {
    ACTIONS.get(label).cloned()
}

/// Render the keypad as a text grid.
pub fn render() -> String {
    const CELL: usize = 7;
    let mut out = String::new();

    for row in GRID {
        let mut line = String::new();
        let mut span = 1;
        for label in row {
            if label.is_empty() {
                span += 1;
                continue;
            }
            let width = CELL * span - 1;
            line.push_str(&format!("[{:^width$}]", label, width = width - 2));
            line.push(' ');
            span = 1;
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
