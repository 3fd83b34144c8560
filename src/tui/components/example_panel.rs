//! # Example Panel Component
//!
//! The area under the tab menu. Shows a prompt until a topic is chosen,
//! then the chosen example's title, description and code.
//!
//! Code is drawn exactly as stored: no wrapping, no trimming, no
//! highlighting. Lines wider than the panel are clipped at the border.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::content::ExampleRecord;
use crate::core::state::Selection;

pub const PROMPT: &str = "Please select a topic";

/// Borders of the code block (1 top + 1 bottom).
const CODE_VERTICAL_OVERHEAD: u16 = 2;

#[derive(Clone, Copy)]
pub struct ExamplePanel {
    pub selection: Selection,
    pub accent: Color,
}

/// Row offsets of the parts of a selected example, relative to the panel top.
struct Sections {
    description: u16,
    description_height: u16,
    code: u16,
    code_height: u16,
}

impl Sections {
    fn compute(record: &ExampleRecord, width: u16) -> Self {
        let description_height = Paragraph::new(record.description)
            .wrap(Wrap { trim: true })
            .line_count(width.max(1)) as u16;
        // title, blank, description, blank, code
        let description = 2;
        let code = description + description_height + 1;
        let code_height = Text::from(record.code).height() as u16 + CODE_VERTICAL_OVERHEAD;
        Self {
            description,
            description_height,
            code,
            code_height,
        }
    }

    fn total(&self) -> u16 {
        self.code + self.code_height
    }
}

impl ExamplePanel {
    pub fn new(selection: Selection, accent: Color) -> Self {
        Self { selection, accent }
    }

    pub fn calculate_height(selection: Selection, width: u16) -> u16 {
        match selection.example() {
            None => 1,
            Some(record) => Sections::compute(record, width).total(),
        }
    }
}

impl Widget for ExamplePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let record = match self.selection.example() {
            None => {
                Paragraph::new(PROMPT)
                    .style(
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )
                    .render(area, buf);
                return;
            }
            Some(record) => record,
        };

        let sections = Sections::compute(record, area.width);
        let row = |offset: u16, height: u16| {
            let y = area.y.saturating_add(offset);
            let height = height.min(area.bottom().saturating_sub(y));
            Rect::new(area.x, y.min(area.bottom()), area.width, height)
        };

        Paragraph::new(record.title)
            .style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
            .render(row(0, 1), buf);

        Paragraph::new(record.description)
            .wrap(Wrap { trim: true })
            .render(row(sections.description, sections.description_height), buf);

        Paragraph::new(record.code)
            .block(
                Block::bordered()
                    .title(" code ")
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            )
            .render(row(sections.code, sections.code_height), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{ExampleKey, example};
    use crate::test_support::buffer_lines;

    fn render(selection: Selection, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, ExamplePanel::calculate_height(selection, width));
        let mut buf = Buffer::empty(area);
        ExamplePanel::new(selection, Color::Cyan).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_unselected_shows_prompt() {
        let lines = render(Selection::Unselected, 60);
        assert_eq!(lines, vec![PROMPT.to_string()]);
    }

    #[test]
    fn test_selected_shows_fields_verbatim() {
        let record = example(ExampleKey::State);
        let lines = render(Selection::Selected(ExampleKey::State), 200);

        assert_eq!(lines[0], record.title);
        assert_eq!(lines[2], record.description);

        // Code rows sit inside "│ " ... "│"; indentation must survive
        let code_rows: Vec<&str> = lines[5..lines.len() - 1]
            .iter()
            .map(|l| l.trim_start_matches("│ ").trim_end_matches('│').trim_end())
            .collect();
        let expected: Vec<&str> = record.code.lines().map(str::trim_end).collect();
        assert_eq!(code_rows, expected);
    }

    #[test]
    fn test_height_matches_sections() {
        let record = example(ExampleKey::Props);
        let height = ExamplePanel::calculate_height(Selection::Selected(ExampleKey::Props), 200);
        // title + blank + 1 description line + blank + code + borders
        assert_eq!(height, 4 + record.code.lines().count() as u16 + 2);
    }

    #[test]
    fn test_description_wraps_when_narrow() {
        let selection = Selection::Selected(ExampleKey::Jsx);
        assert!(
            ExamplePanel::calculate_height(selection, 40)
                > ExamplePanel::calculate_height(selection, 200)
        );
    }
}
