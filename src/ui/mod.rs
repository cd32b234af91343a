//! Terminal user interface
//!
//! The browser is a ratatui front end for [`CatalogView`](crate::view::CatalogView):
//! its [`AppState`](ratatui_adapter::AppState) implements
//! [`CatalogRenderer`](crate::view::CatalogRenderer), and key and mouse
//! events are turned into view operations by the app loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Filters: department  level  credits  instr.  │
//! ├─────────────────────────┬────────────────────┤
//! │ Courses (n/total)       │ Details            │
//! │                         │                    │
//! ├─────────────────────────┴────────────────────┤
//! │ status (hidden when empty)                   │
//! │ key hints                                    │
//! └──────────────────────────────────────────────┘
//! ```

mod error;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::CatalogBrowser;
