//! # Application State
//!
//! Core state for the viewer. Domain only: no TUI types live here.
//! Presentation state (focus, scroll offset, cached hit areas) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── selection: Selection        // which example tab is shown
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::content::{ExampleKey, ExampleRecord, example};

/// Which example topic, if any, the user has chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(ExampleKey),
}

impl Selection {
    pub fn is_selected(self, key: ExampleKey) -> bool {
        self == Selection::Selected(key)
    }

    pub fn key(self) -> Option<ExampleKey> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(key) => Some(key),
        }
    }

    /// The record to show in the example panel.
    pub fn example(self) -> Option<&'static ExampleRecord> {
        self.key().map(example)
    }
}

pub struct App {
    pub selection: Selection,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            selection: Selection::Unselected,
            status_message: String::from("No topic selected"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.selection, Selection::Unselected);
        assert_eq!(app.status_message, "No topic selected");
    }

    #[test]
    fn test_selection_is_selected() {
        let selection = Selection::Selected(ExampleKey::Props);
        assert!(selection.is_selected(ExampleKey::Props));
        assert!(!selection.is_selected(ExampleKey::State));
        assert!(!Selection::Unselected.is_selected(ExampleKey::Props));
    }

    #[test]
    fn test_selection_example_lookup() {
        assert!(Selection::Unselected.example().is_none());
        let record = Selection::Selected(ExampleKey::Jsx).example().unwrap();
        assert_eq!(record.title, "JSX");
    }
}
