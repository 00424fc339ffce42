//! Clipboard functionality for copying calculator results.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Extract the result from a history line such as `5 Add 3 = 8`.
///
/// Returns `None` when the line holds no result yet or the calculation failed.
pub fn result_of(history: &str) -> Option<&str> {
    let (_, result) = history.rsplit_once(" = ")?;
    let result = result.trim();
    if result.is_empty() || result == "error" {
        None
    } else {
        Some(result)
    }
}

/// Copy the result of a history line to the system clipboard.
///
/// Returns the copied text.
pub fn copy_to_clipboard(history: &str) -> Result<String> {
    let Some(result) = result_of(history) else {
        bail!("No result to copy");
    };

    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(result.to_string())
        .context("Failed to copy to clipboard")?;

    Ok(result.to_string())
}
