//! Headless browsing state: row selection and page navigation.
//!
//! Nothing here performs I/O or rendering, so the whole model can be driven
//! directly from tests.

mod pagination;
mod selection;

pub use pagination::{Completion, LoadState, PageRequest, Pagination};
pub use selection::{parse_count, SelectionSet};
