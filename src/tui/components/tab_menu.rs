//! # Tab Menu Component
//!
//! The row of example tab buttons and the input handling behind it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TabMenuState` lives in `TuiState` (focus and on-screen hit areas)
//! - `TabMenu` is created each frame from the current selection
//!
//! Focus is presentation state only. Moving it never changes the selection;
//! only an activation does, and each activation yields exactly one
//! [`TabEvent::Select`].

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::core::content::{ExampleKey, TAB_ORDER};
use crate::core::state::Selection;
use crate::tui::component::EventHandler;
use crate::tui::components::TabButton;
use crate::tui::event::TuiEvent;

/// Columns between neighbouring buttons.
const BUTTON_GAP: u16 = 1;

/// Events emitted by the tab menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Select(ExampleKey),
}

/// Persistent state for the tab menu.
pub struct TabMenuState {
    /// Index into `TAB_ORDER` of the button `Enter` would activate.
    pub focused: usize,
    /// Screen areas of the visible buttons, refreshed on every draw.
    pub hit_areas: Vec<(ExampleKey, Rect)>,
}

impl TabMenuState {
    pub fn new() -> Self {
        Self {
            focused: 0,
            hit_areas: Vec::new(),
        }
    }

    pub fn focused_key(&self) -> ExampleKey {
        TAB_ORDER[self.focused]
    }

    fn focus(&mut self, key: ExampleKey) {
        if let Some(index) = TAB_ORDER.iter().position(|k| *k == key) {
            self.focused = index;
        }
    }

    fn activate(&mut self, key: ExampleKey) -> Option<TabEvent> {
        self.focus(key);
        Some(TabEvent::Select(key))
    }

    /// Lay the buttons out left to right inside `area`. Buttons that don't
    /// fit are clipped or dropped.
    pub fn button_rects(area: Rect) -> Vec<(ExampleKey, Rect)> {
        let mut rects = Vec::with_capacity(TAB_ORDER.len());
        let mut x = area.x;
        for key in TAB_ORDER {
            let right = area.right();
            if x >= right {
                break;
            }
            let width = TabButton::width(key.label()).min(right - x);
            rects.push((key, Rect::new(x, area.y, width, TabButton::HEIGHT.min(area.height))));
            x = x.saturating_add(width + BUTTON_GAP);
        }
        rects
    }
}

impl Default for TabMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for TabMenuState {
    type Event = TabEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TabEvent> {
        match event {
            TuiEvent::FocusNext => {
                self.focused = (self.focused + 1) % TAB_ORDER.len();
                None
            }
            TuiEvent::FocusPrev => {
                self.focused = (self.focused + TAB_ORDER.len() - 1) % TAB_ORDER.len();
                None
            }
            TuiEvent::Activate => self.activate(self.focused_key()),
            TuiEvent::Hotkey(c) => ExampleKey::from_hotkey(*c).and_then(|key| self.activate(key)),
            TuiEvent::MouseClick(col, row) => {
                let hit = self
                    .hit_areas
                    .iter()
                    .find(|(_, area)| area.contains(Position::new(*col, *row)))
                    .map(|(key, _)| *key);
                hit.and_then(|key| self.activate(key))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the tab menu.
pub struct TabMenu {
    selection: Selection,
    focused: Option<ExampleKey>,
    accent: Color,
}

impl TabMenu {
    pub fn new(selection: Selection, focused: Option<ExampleKey>, accent: Color) -> Self {
        Self {
            selection,
            focused,
            accent,
        }
    }
}

impl Widget for TabMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (key, rect) in TabMenuState::button_rects(area) {
            TabButton::new(
                key.label(),
                self.selection.is_selected(key),
                self.focused == Some(key),
                self.accent,
            )
            .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn selected_buttons(buf: &Buffer, area: Rect) -> Vec<ExampleKey> {
        TabMenuState::button_rects(area)
            .into_iter()
            .filter(|(_, rect)| buf[(rect.x + 2, rect.y + 1)].modifier.contains(Modifier::REVERSED))
            .map(|(key, _)| key)
            .collect()
    }

    #[test]
    fn test_button_rects_in_tab_order() {
        let rects = TabMenuState::button_rects(Rect::new(0, 5, 80, 3));
        let keys: Vec<_> = rects.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, TAB_ORDER.to_vec());
        // Components (14) + gap, JSX (7) + gap, ...
        assert_eq!(rects[0].1, Rect::new(0, 5, 14, 3));
        assert_eq!(rects[1].1, Rect::new(15, 5, 7, 3));
        assert_eq!(rects[2].1.x, 23);
    }

    #[test]
    fn test_button_rects_clip_when_narrow() {
        let rects = TabMenuState::button_rects(Rect::new(0, 0, 20, 3));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].1.width, 5);
    }

    #[test]
    fn test_focus_wraps_and_never_selects() {
        let mut state = TabMenuState::new();
        assert_eq!(state.handle_event(&TuiEvent::FocusPrev), None);
        assert_eq!(state.focused_key(), ExampleKey::State);
        assert_eq!(state.handle_event(&TuiEvent::FocusNext), None);
        assert_eq!(state.focused_key(), ExampleKey::Components);
    }

    #[test]
    fn test_activate_selects_focused() {
        let mut state = TabMenuState::new();
        state.handle_event(&TuiEvent::FocusNext);
        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(TabEvent::Select(ExampleKey::Jsx))
        );
    }

    #[test]
    fn test_hotkey_selects_and_moves_focus() {
        let mut state = TabMenuState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Hotkey('3')),
            Some(TabEvent::Select(ExampleKey::Props))
        );
        assert_eq!(state.focused_key(), ExampleKey::Props);
        assert_eq!(state.handle_event(&TuiEvent::Hotkey('7')), None);
    }

    #[test]
    fn test_click_hits_button_area() {
        let mut state = TabMenuState::new();
        state.hit_areas = TabMenuState::button_rects(Rect::new(2, 10, 80, 3));

        // Inside "State"
        let (_, state_rect) = state.hit_areas[3];
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(state_rect.x + 1, 11)),
            Some(TabEvent::Select(ExampleKey::State))
        );
        // In the gap between Components and JSX
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(16, 11)), None);
        // Above the menu
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 9)), None);
    }

    #[test]
    fn test_scroll_events_ignored() {
        let mut state = TabMenuState::new();
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
    }

    #[test]
    fn test_at_most_one_button_selected() {
        let area = Rect::new(0, 0, 60, 3);

        let mut buf = Buffer::empty(area);
        TabMenu::new(Selection::Unselected, Some(ExampleKey::Components), Color::Cyan)
            .render(area, &mut buf);
        assert!(selected_buttons(&buf, area).is_empty());

        for key in TAB_ORDER {
            let mut buf = Buffer::empty(area);
            TabMenu::new(Selection::Selected(key), None, Color::Cyan).render(area, &mut buf);
            assert_eq!(selected_buttons(&buf, area), vec![key]);
        }
    }
}
