use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::content::ConceptRecord;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless card showing one core concept: image placeholder, title and
/// description.
///
/// Created fresh each frame from a borrowed [`ConceptRecord`]; the record's
/// text is rendered as-is, only word-wrapped to the card width.
#[derive(Clone, Copy)]
pub struct ConceptCard<'a> {
    pub concept: &'a ConceptRecord,
    pub accent: Color,
}

impl<'a> ConceptCard<'a> {
    pub fn new(concept: &'a ConceptRecord, accent: Color) -> Self {
        Self { concept, accent }
    }

    fn text(&self) -> Text<'a> {
        Text::from(vec![
            Line::styled(
                format!("[ {} ]", self.concept.image.as_str()),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                self.concept.title,
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ),
            Line::raw(self.concept.description),
        ])
    }

    /// Height of the card at `width`, borders included.
    pub fn calculate_height(concept: &ConceptRecord, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD;
        }
        let lines = Paragraph::new(ConceptCard::new(concept, Color::Reset).text())
            .wrap(Wrap { trim: true })
            .line_count(content_width);
        lines as u16 + VERTICAL_OVERHEAD
    }
}

impl Widget for ConceptCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
