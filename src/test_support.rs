//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::default_quick_questions;
use crate::core::lang::Lang;
use crate::core::state::App;
use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Collects the visible text of a rendered buffer, skipping the placeholder
/// cells that follow wide (e.g. CJK) symbols so assertions can match the
/// original strings.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    let mut skip = 0usize;
    for cell in buffer.content() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        let symbol = cell.symbol();
        skip = symbol.width().saturating_sub(1);
        text.push_str(symbol);
    }
    text
}

/// Creates an App in its startup state (Chinese chrome, built-in quick
/// questions).
pub fn test_app() -> App {
    App::new(Lang::Zh, default_quick_questions())
}
