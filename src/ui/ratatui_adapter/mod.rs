//! Ratatui-based catalog browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           CatalogBrowser                    │
//! │  (event loop, owns terminal setup)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │CatalogView │ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::CatalogBrowser;
pub use events::EventResult;
pub use state::{AppState, MessageLevel, Mode, StatusMessage};
pub use theme::Theme;
