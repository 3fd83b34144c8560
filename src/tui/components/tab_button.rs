//! # TabButton Component
//!
//! One button of the example tab menu. Purely presentational: the parent
//! tells it whether it is the selected topic and whether it has keyboard
//! focus. Activation is handled by [`TabMenuState`](super::TabMenuState),
//! which owns the button geometry.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

/// Border plus one column of padding on each side.
const HORIZONTAL_OVERHEAD: u16 = 4;

#[derive(Clone, Copy)]
pub struct TabButton<'a> {
    pub label: &'a str,
    pub is_selected: bool,
    pub is_focused: bool,
    pub accent: Color,
}

impl<'a> TabButton<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(label: &'a str, is_selected: bool, is_focused: bool, accent: Color) -> Self {
        Self {
            label,
            is_selected,
            is_focused,
            accent,
        }
    }

    pub fn width(label: &str) -> u16 {
        label.width() as u16 + HORIZONTAL_OVERHEAD
    }
}

impl Widget for TabButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.is_selected {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };

        let border_style = if self.is_focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(border_style))
            .render(area, buf);
    }
}
