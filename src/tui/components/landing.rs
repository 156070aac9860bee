//! # Landing Page Component
//!
//! Shown while the transcript is empty: a welcome heading, a one-line
//! description, the quick-question list with its Alt+N bindings, and the
//! key hints. Everything is localized through the label table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::config::QuickQuestion;
use crate::core::lang::{Labels, Lang};
use crate::tui::component::Component;

pub struct LandingPage<'a> {
    labels: &'static Labels,
    quick_questions: &'a [QuickQuestion],
    lang: Lang,
}

impl<'a> LandingPage<'a> {
    pub fn new(labels: &'static Labels, quick_questions: &'a [QuickQuestion], lang: Lang) -> Self {
        Self {
            labels,
            quick_questions,
            lang,
        }
    }
}

impl<'a> Component for LandingPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(Color::DarkGray);

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            self.labels.landing_heading,
            heading_style,
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(self.labels.landing_intro, dim_style)));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.labels.quick_heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (i, question) in self.quick_questions.iter().enumerate().take(9) {
            lines.push(Line::from(vec![
                Span::styled(format!("Alt+{}  ", i + 1), dim_style),
                Span::raw(question.text(self.lang)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(self.labels.hints, dim_style)));

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }
}
