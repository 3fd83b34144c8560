//! # Header Component
//!
//! Static banner at the top of the page. No state, and the only prop is the
//! accent colour.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

pub const TITLE: &str = "React Essentials";
pub const TAGLINE: &str =
    "Fundamental React concepts you will need for almost any app you are going to build!";
const LOGO: &str = "[ react-core-concepts.png ]";

pub struct Header {
    pub accent: Color,
}

impl Header {
    pub fn new(accent: Color) -> Self {
        Self { accent }
    }

    fn text(&self) -> Text<'static> {
        Text::from(vec![
            Line::styled(LOGO, Style::default().fg(Color::DarkGray)),
            Line::styled(
                TITLE,
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ),
            Line::styled(TAGLINE, Style::default().fg(Color::Gray)),
        ])
    }

    /// Rows needed at `width`, including the bottom rule.
    pub fn calculate_height(width: u16) -> u16 {
        let lines = Paragraph::new(Header::new(Color::Reset).text())
            .wrap(Wrap { trim: true })
            .line_count(width.max(1));
        lines as u16 + 1
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;

    #[test]
    fn test_header_renders_title_and_tagline() {
        let area = Rect::new(0, 0, 100, Header::calculate_height(100));
        let mut buf = Buffer::empty(area);
        Header::new(Color::Cyan).render(area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains(TITLE));
        assert!(text.contains(TAGLINE));
        assert!(text.contains("react-core-concepts.png"));
    }

    #[test]
    fn test_header_height_grows_when_narrow() {
        // logo + title + tagline + rule
        assert_eq!(Header::calculate_height(100), 4);
        assert!(Header::calculate_height(40) > 4);
    }
}
