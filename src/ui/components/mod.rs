//! Reusable UI components.

mod help_bar;
mod input;
mod loading;
mod modal;
mod notification;
mod table;

pub use help_bar::render_context_help;
pub use loading::{LoadingIndicator, SpinnerStyle};
pub(crate) use modal::centered_rect;
pub use modal::{BulkSelectAction, BulkSelectDialog};
pub use notification::NotificationManager;
pub use table::ArtworkTable;
