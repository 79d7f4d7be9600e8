//! User interface components and views.
//!
//! This module contains all TUI rendering logic. State lives in `App` and the
//! model; everything here draws it or turns keys into intents.

mod components;
pub mod theme;
mod views;

pub use components::{
    render_context_help, BulkSelectAction, BulkSelectDialog, LoadingIndicator,
    NotificationManager, SpinnerStyle,
};
pub use theme::Theme;
pub use views::{render_help, TableAction, TableView};
