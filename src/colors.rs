//! Color utilities for request log lines.

use axum::http::StatusCode;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

use crate::ops::Operation;

/// Palette request IDs are hashed into
///
/// Standard and bright variants of every non-grayscale color, so adjacent
/// requests in the log are easy to tell apart on light and dark terminals.
const ID_COLORS: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to a palette color
///
/// Same ID, same color, across runs.
pub fn get_color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
    ID_COLORS[hash as usize % ID_COLORS.len()]
}

/// Formats a request ID as `[id]` in its color
pub fn colored_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(get_color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}

/// Tag naming the filesystem operation a request performs
pub fn operation_tag(op: Operation) -> String {
    match op {
        Operation::Read => "READ".green().to_string(),
        Operation::Write => "WRITE".yellow().to_string(),
        Operation::Delete => "DELETE".red().to_string(),
    }
}

/// Status code colored by class: green for 2xx, yellow for 4xx, red for 5xx
pub fn colored_status(status: StatusCode) -> String {
    if status.is_server_error() {
        status.red().to_string()
    } else if status.is_client_error() {
        status.yellow().to_string()
    } else {
        status.green().to_string()
    }
}
