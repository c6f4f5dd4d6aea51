//! Interactive browse view
//!
//! A ratatui/crossterm front end over [`HubSession`](crate::session::HubSession).
//! The session owns every piece of catalog, filter and selection state; the
//! view keeps only cursors, focus and transient messages, and re-derives the
//! visible list from the session on every frame.
//!
//! ```text
//! ┌ Search ───────────────────────────────────────┐
//! │ query│                                        │
//! └───────────────────────────────────────────────┘
//!  Plugins │ Scripts │ How to Install │ Submit Info
//! ┌ Plugins (12) ───────────────┐┌ Tag Filter [OR] ┐
//! │ > ✓ Name [tag, tag]         ││ ✓ audio         │
//! │     description  Author: …  ││   video         │
//! └─────────────────────────────┘└─────────────────┘
//! ┌───────────────────────────────────────────────┐
//! │ ✓ Opened 2 of 2 download link(s)  12/40 · … │
//! └───────────────────────────────────────────────┘
//! ```

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{BrowseApp, CatalogAccess};
pub use error::{Result, UiError};
pub use events::EventResult;
pub use state::{BrowseState, FocusPane, MessageLevel, Notice};
pub use theme::Theme;
