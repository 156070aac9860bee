use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::lang::Labels;
use crate::core::transcript::{Entry, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single transcript entry.
///
/// `Message` is a **transient component**: created fresh each frame with the
/// data it needs. The role title and color come from the entry's role; the
/// entry currently receiving revealed text gets a non-dim border so the
/// active answer stands out from the history.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub entry: &'a Entry,
    pub labels: &'static Labels,
    /// Whether this entry is the one still growing (loading or revealing).
    pub is_active: bool,
}

impl<'a> Message<'a> {
    pub fn new(entry: &'a Entry, labels: &'static Labels, is_active: bool) -> Self {
        Self {
            entry,
            labels,
            is_active,
        }
    }

    /// Calculate the height this entry needs at the given width.
    ///
    /// Uses `Paragraph::line_count` with the same wrap settings as the
    /// render path, so the parent `MessageList` can size its scroll canvas
    /// without rendering anything. CJK answers wrap by display width, which
    /// `line_count` accounts for.
    pub fn calculate_height(entry: &Entry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }
        let paragraph = Paragraph::new(entry.content.trim()).wrap(Wrap { trim: true });
        (paragraph.line_count(content_width) as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn role_label(&self) -> &'static str {
        match self.entry.role {
            Role::User => self.labels.you,
            Role::Assistant => self.labels.assistant,
        }
    }

    fn role_style(&self) -> Style {
        match self.entry.role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Assistant => Style::default().fg(Color::Green),
        }
    }
}

// Widget rather than Component so MessageList can render into a ScrollView.
impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.role_style();
        let border_style = if self.is_active {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(self.role_label())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.entry.content.trim())
            .style(style)
            .wrap(Wrap { trim: true });
        paragraph.render(inner_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(role: Role, content: &str) -> Entry {
        Entry {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_height_single_line() {
        let e = entry(Role::User, "金银花茶有什么功效？");
        // One content line + top and bottom border
        assert_eq!(Message::calculate_height(&e, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_height_empty_entry_still_occupies_a_box() {
        // A freshly opened answer entry renders as an empty bordered box.
        let e = entry(Role::Assistant, "");
        assert_eq!(Message::calculate_height(&e, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_height_wraps_at_width_boundary() {
        let e = entry(Role::User, "hello world");
        // width 9 → content_width 5 → "hello" | "world" = 2 lines
        assert_eq!(Message::calculate_height(&e, 9), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_height_zero_width_returns_minimum() {
        let e = entry(Role::User, "hello");
        assert_eq!(Message::calculate_height(&e, 0), 1);
        assert_eq!(Message::calculate_height(&e, HORIZONTAL_OVERHEAD), 1);
    }

    #[test]
    fn test_role_presentation() {
        use crate::core::lang::Lang;
        let labels = Lang::Zh.labels();
        let user_entry = entry(Role::User, "q");
        let assistant_entry = entry(Role::Assistant, "a");
        let user = Message::new(&user_entry, labels, false);
        let assistant = Message::new(&assistant_entry, labels, false);
        assert_eq!(user.role_label(), "你");
        assert_eq!(assistant.role_label(), "茶问");
        assert_eq!(user.role_style().fg, Some(Color::Cyan));
        assert_eq!(assistant.role_style().fg, Some(Color::Green));
    }
}
