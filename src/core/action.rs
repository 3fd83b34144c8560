//! # Actions
//!
//! Everything that can happen to the viewer becomes an `Action`.
//! User activates the "Props" tab? That's `Action::SelectTopic(ExampleKey::Props)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` telling the event loop what to
//! do next. No side effects here beyond logging. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::content::ExampleKey;
use crate::core::state::{App, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A tab button was activated.
    SelectTopic(ExampleKey),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectTopic(key) => {
            // Unconditional, including re-selecting the current key.
            let previous = app.selection;
            app.selection = Selection::Selected(key);
            app.status_message = format!("Selected: {}", key.label());
            debug!("Selection {:?} -> {:?}", previous, app.selection);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_topic_from_unselected() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SelectTopic(ExampleKey::Props));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.selection, Selection::Selected(ExampleKey::Props));
        assert_eq!(app.status_message, "Selected: Props");
    }

    #[test]
    fn test_select_topic_switches_key() {
        let mut app = App::new();
        update(&mut app, Action::SelectTopic(ExampleKey::Jsx));
        update(&mut app, Action::SelectTopic(ExampleKey::State));
        assert_eq!(app.selection, Selection::Selected(ExampleKey::State));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut app = App::new();
        update(&mut app, Action::SelectTopic(ExampleKey::Components));
        let before = (app.selection, app.status_message.clone());
        update(&mut app, Action::SelectTopic(ExampleKey::Components));
        assert_eq!((app.selection, app.status_message.clone()), before);
    }

    #[test]
    fn test_every_key_is_reachable() {
        for key in ExampleKey::ALL {
            let mut app = App::new();
            update(&mut app, Action::SelectTopic(key));
            assert_eq!(app.selection.key(), Some(key));
        }
    }

    #[test]
    fn test_quit_leaves_selection_alone() {
        let mut app = App::new();
        update(&mut app, Action::SelectTopic(ExampleKey::Jsx));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.selection, Selection::Selected(ExampleKey::Jsx));
    }
}
