//! Cross-page row selection.
//!
//! [`SelectionSet`] holds the ids of selected artworks. Membership does not
//! depend on which page is loaded: an id stays selected until it is
//! explicitly removed, even while its record is not visible.

use std::collections::HashSet;

use tracing::debug;

use crate::api::{Artwork, ArtworkId};

/// Something that carries an artwork id.
pub trait Identified {
    /// The id of this item.
    fn id(&self) -> ArtworkId;
}

impl Identified for Artwork {
    fn id(&self) -> ArtworkId {
        self.id
    }
}

impl Identified for ArtworkId {
    fn id(&self) -> ArtworkId {
        *self
    }
}

/// The set of selected artwork ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of `id`.
    pub fn toggle(&mut self, id: ArtworkId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        debug!(id, selected = self.ids.contains(&id), "Toggled row");
    }

    /// Select or deselect an entire visible page.
    ///
    /// If every id in `visible_ids` is already selected they are all removed;
    /// otherwise they are all inserted. Selections on other pages are never
    /// consulted or changed.
    pub fn select_all_visible(&mut self, visible_ids: &[ArtworkId]) {
        if visible_ids.iter().all(|id| self.ids.contains(id)) {
            for id in visible_ids {
                self.ids.remove(id);
            }
            debug!(count = visible_ids.len(), "Deselected visible page");
        } else {
            self.ids.extend(visible_ids.iter().copied());
            debug!(count = visible_ids.len(), "Selected visible page");
        }
    }

    /// Whether the header checkbox for `visible_ids` is checked.
    ///
    /// An empty page is never shown as fully selected.
    pub fn all_selected(&self, visible_ids: &[ArtworkId]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Add the first `n` items (in order) to the selection.
    ///
    /// Existing members are kept. If `n` exceeds the number of items, all of
    /// them are added. Returns how many ids were newly inserted.
    pub fn select_first_n<T: Identified>(&mut self, items: &[T], n: usize) -> usize {
        let before = self.ids.len();
        self.ids.extend(items.iter().take(n).map(Identified::id));
        let inserted = self.ids.len() - before;
        debug!(requested = n, available = items.len(), inserted, "Bulk selected rows");
        inserted
    }

    /// Number of selected ids.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over the selected ids in no particular order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }
}

/// Parse the bulk-select count typed by the user.
///
/// Leading whitespace and an optional `+` are skipped, then the leading run
/// of ASCII digits is read, so `"3abc"` means 3. Anything without leading
/// digits, and any negative number, means 0 (select nothing). Oversized
/// numbers saturate.
pub fn parse_count(text: &str) -> usize {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);

    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(usize::from(digit - b'0'))
        })
}
