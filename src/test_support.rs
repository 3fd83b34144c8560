//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::core::state::App;
use crate::tui::TuiState;

pub use crate::tui::buffer_lines;

/// Draw a full frame through `TestBackend` and return the resulting buffer.
pub fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| crate::tui::draw_ui(f, app, tui))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Text inside a bordered `rect`, one space between rows, row edges
/// trimmed. Wrapped paragraphs come back as their original single-spaced
/// text.
pub fn inner_text(buf: &Buffer, rect: Rect) -> String {
    let inner = Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    );
    (inner.top()..inner.bottom())
        .map(|y| {
            (inner.left()..inner.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .map(|row| row.trim().to_string())
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
