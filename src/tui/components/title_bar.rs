//! # TitleBar Component
//!
//! Top status bar: application title, lifecycle status, a spinner while a
//! request is loading, and a "↓ New" marker when revealed text is below the
//! current scroll position.
//!
//! TitleBar is purely presentational — it receives all data as props and
//! has no internal state, which keeps it trivial to test. Props are struct
//! fields rather than `render()` parameters because the `Component` trait
//! fixes the render signature.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
///
/// # Props
///
/// - `title`: localized application title
/// - `status`: localized label for the current `Status`
/// - `loading` + `spinner_frame`: drives the spinner animation
/// - `has_unseen_content`: whether revealed text sits below the scroll position
pub struct TitleBar {
    pub title: &'static str,
    pub status: &'static str,
    pub loading: bool,
    pub spinner_frame: usize,
    pub has_unseen_content: bool,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text = format!("{} | {}", self.title, self.status);
        if self.loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            text.push(' ');
            text.push(spinner);
        }
        if self.has_unseen_content {
            text.push_str(" | ↓ New");
        }
        frame.render_widget(Span::raw(text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        crate::test_support::buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_idle() {
        let text = render_to_text(TitleBar {
            title: "茶问",
            status: "就绪",
            loading: false,
            spinner_frame: 0,
            has_unseen_content: false,
        });
        assert!(text.contains("茶问 | 就绪"));
        assert!(!text.contains("↓ New"));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let text = render_to_text(TitleBar {
            title: "Chawen",
            status: "Thinking",
            loading: true,
            spinner_frame: 3,
            has_unseen_content: false,
        });
        assert!(text.contains("Chawen | Thinking ⠸"));
    }

    #[test]
    fn test_title_bar_unseen_content_marker() {
        let text = render_to_text(TitleBar {
            title: "Chawen",
            status: "Done",
            loading: false,
            spinner_frame: 0,
            has_unseen_content: true,
        });
        assert!(text.contains("↓ New"));
    }
}
