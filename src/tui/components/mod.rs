//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props and render as
//! ratatui `Widget`s, so they can be drawn into the scrolling page:
//! - `Header`: static banner
//! - `ConceptCard`: one core concept
//! - `TabButton`: one tab of the example menu
//! - `TabMenu`: the row of tab buttons
//! - `ExamplePanel`: prompt or the selected example
//!
//! `StatusBar` is drawn straight into the `Frame` below the page and
//! implements [`Component`](super::component::Component).
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TabMenuState`: keyboard focus and mouse hit areas; turns input into
//!   `TabEvent::Select`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into
//! `App`. The selection reaches the buttons as an `is_selected` flag and
//! the panel as the looked-up record.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs         (Static banner)
//! ├── concept_card.rs   (Single concept card)
//! ├── tab_button.rs     (Single tab button)
//! ├── tab_menu.rs       (Button row + focus/activation state)
//! ├── example_panel.rs  (Prompt or selected example)
//! └── status_bar.rs     (Bottom status line)
//! ```

pub mod concept_card;
pub mod example_panel;
pub mod header;
pub mod status_bar;
pub mod tab_button;
pub mod tab_menu;

pub use concept_card::ConceptCard;
pub use example_panel::ExamplePanel;
pub use header::Header;
pub use status_bar::StatusBar;
pub use tab_button::TabButton;
pub use tab_menu::{TabEvent, TabMenu, TabMenuState};
