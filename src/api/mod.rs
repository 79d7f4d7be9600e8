//! Artwork catalog API client and types.
//!
//! This module provides the data source: one GET per page of artworks.

mod client;
mod error;
mod types;

pub use client::ArticClient;
pub use error::ApiError;
#[cfg(test)]
pub use types::PageInfo;
pub use types::{Artwork, ArtworkId, ArtworkPage};
