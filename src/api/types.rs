//! Artwork catalog API response types.
//!
//! These types model the `GET /artworks` listing response of the Art Institute
//! of Chicago public API.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an artwork record, stable across pages.
pub type ArtworkId = u64;

/// A single artwork record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// The artwork ID.
    pub id: ArtworkId,
    /// The artwork title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Where the work was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist name with nationality and dates, as displayed by the museum.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the work.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year the work was started.
    #[serde(default)]
    pub date_start: Option<i64>,
    /// Year the work was finished.
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Create an artwork with only an id and title set.
    #[cfg(test)]
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Get the place of origin, or `-` when absent.
    pub fn place_display(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("-")
    }

    /// Get the artist, or `-` when absent.
    pub fn artist_display(&self) -> &str {
        self.artist_display.as_deref().unwrap_or("-")
    }

    /// Get the inscriptions, or `-` when absent.
    pub fn inscriptions_display(&self) -> &str {
        self.inscriptions.as_deref().unwrap_or("-")
    }

    /// Get the start year, or `-` when absent.
    pub fn date_start_display(&self) -> String {
        display_year(self.date_start)
    }

    /// Get the end year, or `-` when absent.
    pub fn date_end_display(&self) -> String {
        display_year(self.date_end)
    }
}

fn display_year(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The page that was returned (1-based).
    pub current_page: u32,
    /// Total number of pages in the collection.
    pub total_pages: u32,
}

/// One page of artworks.
///
/// Returned by `GET /artworks?page={n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// The records on this page, in API order.
    #[serde(default)]
    pub data: Vec<Artwork>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}
