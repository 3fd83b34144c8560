//! # StatusBar Component
//!
//! Bottom line showing the current selection and the key hints.
//!
//! ## Stateless Component
//!
//! StatusBar is purely presentational: it receives all data as props and
//! has no internal state.
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(app.status_message.clone(), true);
//! status_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Mouse enabled**: `"React Essentials | Selected: Props | 1-4 jump  ←/→ focus  Enter select  click  q quit"`
//! 2. **Keyboard only**: same, without the `click` hint
//!
//! The status message always comes before the hints so it survives narrow
//! terminals.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const KEY_HINTS: &str = "1-4 jump  ←/→ focus  Enter select  ↑/↓ scroll";

pub struct StatusBar {
    /// Status message from core state (e.g., "Selected: Props")
    pub status_message: String,
    /// Whether mouse clicks reach the tab buttons
    pub mouse_enabled: bool,
}

impl StatusBar {
    pub fn new(status_message: String, mouse_enabled: bool) -> Self {
        Self {
            status_message,
            mouse_enabled,
        }
    }

    fn hints(&self) -> String {
        if self.mouse_enabled {
            format!("{KEY_HINTS}  click  q quit")
        } else {
            format!("{KEY_HINTS}  q quit")
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(format!("React Essentials | {} | ", self.status_message)),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(status_bar: &mut StatusBar) -> String {
        let backend = TestBackend::new(120, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                status_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_bar_new() {
        let status_bar = StatusBar::new("No topic selected".to_string(), true);
        assert_eq!(status_bar.status_message, "No topic selected");
        assert!(status_bar.mouse_enabled);
    }

    #[test]
    fn test_status_bar_shows_message_and_hints() {
        let mut status_bar = StatusBar::new("Selected: Props".to_string(), true);
        let text = rendered_text(&mut status_bar);

        assert!(text.starts_with("React Essentials | Selected: Props |"));
        assert!(text.contains("Enter select"));
        assert!(text.contains("click"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_status_bar_without_mouse() {
        let mut status_bar = StatusBar::new("No topic selected".to_string(), false);
        let text = rendered_text(&mut status_bar);

        assert!(text.contains("No topic selected"));
        assert!(!text.contains("click"));
    }
}
