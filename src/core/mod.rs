//! # Core Application Logic
//!
//! The viewer's domain: the static content tables, the selection state and
//! the reducer that changes it. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Content (tables)     │
//!                    │  • State (selection)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: `CORE_CONCEPTS`, `EXAMPLES` and their consistency check
//! - [`state`]: The `App` struct and the `Selection` it owns
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file loading and resolution (the only module here
//!   that touches the filesystem)

pub mod action;
pub mod config;
pub mod content;
pub mod state;
