//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on the page animates, so the loop only redraws after input:
//! it waits up to the configured poll interval for an event, drains every
//! pending event, then draws once. Each event yields at most one action.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::style::Color;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{TabEvent, TabMenuState};

pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
pub use crate::tui::ui::{buffer_lines, draw_ui, render_page_lines};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub tab_menu: TabMenuState,
    pub scroll_state: ScrollViewState,
    /// First page row shown at the top of the viewport.
    pub scroll_y: u16,
    // Cached from the last draw
    pub viewport_height: u16,
    pub page_height: u16,
    /// Set on selection; the next draw scrolls the menu and panel into view.
    pub reveal_panel: bool,
    pub accent: Color,
    pub mouse_enabled: bool,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            tab_menu: TabMenuState::new(),
            scroll_state: ScrollViewState::default(),
            scroll_y: 0,
            viewport_height: 0,
            page_height: 0,
            reveal_panel: false,
            accent: config.accent,
            mouse_enabled: config.mouse,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Scroll just enough to show rows `top..bottom`, preferring `top` when
    /// both don't fit.
    pub fn reveal(&mut self, top: u16, bottom: u16) {
        if bottom > self.scroll_y + self.viewport_height {
            self.scroll_y = bottom.saturating_sub(self.viewport_height);
        }
        if top < self.scroll_y {
            self.scroll_y = top;
        }
    }

    fn scroll(&mut self, event: &TuiEvent) {
        let before = self.scroll_y;
        let page = self.viewport_height.saturating_sub(1).max(1);
        self.scroll_y = match event {
            TuiEvent::ScrollUp => self.scroll_y.saturating_sub(1),
            TuiEvent::ScrollDown => self.scroll_y.saturating_add(1),
            TuiEvent::ScrollPageUp => self.scroll_y.saturating_sub(page),
            TuiEvent::ScrollPageDown => self.scroll_y.saturating_add(page),
            TuiEvent::ScrollToTop => 0,
            _ => self.scroll_y,
        };
        self.clamp_scroll();
        if self.scroll_y != before {
            self.tab_menu.hit_areas.clear();
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(&ResolvedConfig::default())
    }
}

/// Route one input event: quit, scroll, or hand it to the tab menu and
/// turn a selection into a core action.
pub fn handle_tui_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop => {
            tui.scroll(&event);
            Effect::None
        }
        TuiEvent::MouseClick(..) if !tui.mouse_enabled => Effect::None,
        _ => match tui.tab_menu.handle_event(&event) {
            Some(TabEvent::Select(key)) => {
                // The next draw may scroll, so positions wait for it
                tui.reveal_panel = true;
                tui.tab_menu.hit_areas.clear();
                update(app, Action::SelectTopic(key))
            }
            None => Effect::None,
        },
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        if mouse {
            execute!(stdout(), EnableMouseCapture, Hide)?;
        } else {
            execute!(stdout(), Hide)?;
        }
        info!("Terminal modes enabled (mouse capture: {})", mouse);
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture, Show);
        } else {
            let _ = execute!(stdout(), Show);
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new(config.mouse).and_then(|_guard| {
        event_loop(&mut terminal, &mut app, &mut tui, &config)
    });
    ratatui::restore();

    info!("Exiting with selection {:?}", app.selection);
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(config.poll_interval)?;
        while let Some(event) = pending {
            needs_redraw = true;
            debug!("Dispatching {:?}", event);
            if handle_tui_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
