//! # InputBox Component
//!
//! Single-line question input.
//!
//! ## Responsibilities
//!
//! - Capture text input and editing (backspace, delete, cursor movement,
//!   paste)
//! - Handle submission (Enter)
//! - Keep the cursor visible through horizontal scrolling when the question
//!   is wider than the box (display-width aware, so CJK input scrolls
//!   correctly)
//!
//! Enter always emits `Submit`, even for an empty buffer — validation is the
//! reducer's job, and it must be identical for typed input and quick
//! questions. The localized title is a prop set by the parent each frame.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{BORDER_OFFSET, CursorState, next_char_boundary, prev_char_boundary};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter; carries the (untrimmed) buffer contents.
    Submit(String),
    /// Text content or cursor changed.
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Localized box title (prop)
    pub title: &'static str,
    /// Cursor position and horizontal window
    cursor: CursorState,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            title: "",
            cursor: CursorState::new(),
        }
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2);
        self.cursor.update_window(&self.buffer, inner_width);

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(self.title);

        let input = Paragraph::new(self.cursor.visible_text(&self.buffer, inner_width))
            .block(block)
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::Green));

        frame.render_widget(input, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: pasted newlines become spaces.
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor.pos > 0 {
                    self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor.reset();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new();

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('茶')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('饮'));
        assert_eq!(input.buffer, "茶饮");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "茶");
    }

    #[test]
    fn test_cursor_moves_by_whole_chars() {
        let mut input = InputBox::new();
        for c in "a金b".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }

        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        // Cursor sits before 金; deleting forward removes the whole char
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ab");
    }

    #[test]
    fn test_insert_at_cursor_position() {
        let mut input = InputBox::new();
        for c in "ac".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");
    }

    #[test]
    fn test_submit_takes_buffer() {
        let mut input = InputBox::new();
        for c in "hello".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }

        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("expected Submit, got {:?}", other),
        }
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_empty_submit_still_emits() {
        // Validation lives in the reducer, not here.
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit(String::new()))
        );
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("green\ntea".to_string()));
        assert_eq!(input.buffer, "green tea");
    }

    #[test]
    fn test_home_and_end() {
        let mut input = InputBox::new();
        for c in "abc".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(InputEvent::ContentChanged)
        );
        // Already at home: no event
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(
            input.handle_event(&TuiEvent::CursorEnd),
            Some(InputEvent::ContentChanged)
        );
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.title = "输入问题";
        for c in "姜茶".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = crate::test_support::buffer_text(terminal.backend().buffer());
        assert!(text.contains("输入问题"));
        assert!(text.contains("姜茶"));
    }
}
