//! Application views (screens).

mod help;
mod table;

pub use help::render_help;
pub use table::{TableAction, TableView};
