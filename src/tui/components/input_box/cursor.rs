//! Cursor tracking for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal window.
//! Navigation methods take `buffer: &str` explicitly — the text is owned by
//! `InputBox`, keeping the dependency visible. Widths are display columns
//! (CJK characters occupy two), not bytes or chars.

use unicode_width::UnicodeWidthStr;

/// Offset from the area edge to the first text cell (the border).
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Byte offset of the first visible character (horizontal scrolling)
    pub window_start: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            window_start: 0,
        }
    }

    /// Reset cursor to start (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.window_start = 0;
    }

    /// Slide the window so the cursor stays visible within `inner_width`
    /// display columns. One column is reserved for the cursor itself.
    pub fn update_window(&mut self, buffer: &str, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        if self.pos < self.window_start {
            self.window_start = self.pos;
            return;
        }
        let budget = inner_width.saturating_sub(1) as usize;
        while buffer[self.window_start..self.pos].width() > budget {
            self.window_start = next_char_boundary(buffer, self.window_start);
        }
    }

    /// The slice of `buffer` that fits in the window, starting at
    /// `window_start` and cut off where the display width runs out.
    pub fn visible_text<'a>(&self, buffer: &'a str, inner_width: u16) -> &'a str {
        let visible = &buffer[self.window_start..];
        let mut used = 0usize;
        let mut end = visible.len();
        for (offset, ch) in visible.char_indices() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > inner_width as usize {
                end = offset;
                break;
            }
            used += w;
        }
        &visible[..end]
    }

    /// Screen position of the cursor inside `area` (column, row).
    pub fn screen_pos(&self, buffer: &str, area: ratatui::layout::Rect) -> (u16, u16) {
        let col = buffer[self.window_start..self.pos].width() as u16;
        (area.x + BORDER_OFFSET + col, area.y + BORDER_OFFSET)
    }
}

/// Largest char boundary strictly before `pos`.
pub(super) fn prev_char_boundary(buffer: &str, pos: usize) -> usize {
    let mut i = pos - 1;
    while !buffer.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary strictly after `pos`.
pub(super) fn next_char_boundary(buffer: &str, pos: usize) -> usize {
    let mut i = pos + 1;
    while i < buffer.len() && !buffer.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_step_over_multibyte() {
        let s = "a茶b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 4); // 茶 is 3 bytes
        assert_eq!(prev_char_boundary(s, 4), 1);
        assert_eq!(prev_char_boundary(s, 5), 4);
    }

    #[test]
    fn test_window_follows_cursor_right() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_window(buffer, 5);
        // 4-column budget before the cursor cell
        assert_eq!(&buffer[cursor.window_start..], "ghij");
    }

    #[test]
    fn test_window_snaps_back_on_cursor_left() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_window(buffer, 5);
        cursor.pos = 2;
        cursor.update_window(buffer, 5);
        assert_eq!(cursor.window_start, 2);
    }

    #[test]
    fn test_window_accounts_for_wide_chars() {
        // Each CJK char is two columns: only two fit in a 5-column window
        // once the cursor column is reserved.
        let buffer = "金银花茶饮";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_window(buffer, 5);
        assert_eq!(&buffer[cursor.window_start..], "茶饮");
    }

    #[test]
    fn test_visible_text_cuts_at_width() {
        let buffer = "金银花茶饮";
        let cursor = CursorState::new();
        // 5 columns fit two wide chars (4 columns); the third would overflow
        assert_eq!(cursor.visible_text(buffer, 5), "金银");
        assert_eq!(cursor.visible_text(buffer, 6), "金银花");
    }
}
