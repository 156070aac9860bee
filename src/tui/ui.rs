//! Frame layout: title bar, transcript (or landing page), optional error
//! banner, input box. All real rendering happens inside the components.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Status};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let labels = app.labels();

    let error_height = if app.error.is_some() { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(error_height), Length(3)]);
    let [title_area, main_area, error_area, input_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar {
        title: labels.app_title,
        status: app.status.label(labels),
        loading: app.status == Status::Loading,
        spinner_frame,
        has_unseen_content: tui.message_list.has_unseen_content,
    };
    title_bar.render(frame, title_area);

    // Main area: landing page until the first question, transcript after
    if app.transcript.is_empty() {
        let mut landing = LandingPage::new(labels, &app.quick_questions, app.lang);
        landing.render(frame, main_area);
    } else {
        // The trailing assistant entry is the one still growing
        let streaming = app.status == Status::Loading || app.reveal_active;
        let mut list = MessageList::new(
            &mut tui.message_list,
            app.transcript.entries(),
            labels,
            streaming,
        );
        list.render(frame, main_area);
    }

    // Error banner (validation message or request failure)
    if let Some(message) = &app.error {
        let banner = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(banner, error_area);
    }

    // Input box (sets the terminal cursor position)
    tui.input_box.title = labels.input_title;
    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_transcript_shows_landing() {
        let app = test_app();
        let text = render_to_text(&app);
        assert!(text.contains("欢迎使用茶问"));
        assert!(text.contains("金银花茶有什么功效？"));
    }

    #[test]
    fn test_transcript_replaces_landing() {
        let mut app = test_app();
        update(&mut app, Action::Submit("生姜茶有什么功效？".to_string()));
        let text = render_to_text(&app);
        assert!(!text.contains("欢迎使用茶问"));
        assert!(text.contains("生姜茶有什么功效？"));
    }

    #[test]
    fn test_error_banner_shows_validation_message() {
        let mut app = test_app();
        update(&mut app, Action::Submit("   ".to_string()));
        let text = render_to_text(&app);
        assert!(text.contains("请输入问题"));
    }
}
