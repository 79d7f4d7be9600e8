//! Page navigation and the resident page of records.
//!
//! [`Pagination`] issues [`PageRequest`]s and applies their responses. Every
//! request gets a fresh id and only the most recently issued one may update
//! the page, so a slow response for an earlier navigation can never overwrite
//! a later one.

use tracing::{debug, info, warn};

use crate::api::{Artwork, ArtworkId, ArtworkPage};

/// A page fetch the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number used to match the response.
    pub id: u64,
    /// The page to fetch (1-based).
    pub page: u32,
}

/// The loading state of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No fetch in flight.
    #[default]
    Idle,
    /// A fetch for `page` is in flight.
    Loading {
        /// The page being fetched.
        page: u32,
    },
    /// The last fetch failed.
    Failed {
        /// The page that failed to load.
        page: u32,
        /// Description of the failure.
        message: String,
    },
}

/// What [`Pagination::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The page replaced the resident one.
    Applied,
    /// The fetch failed and the controller is now in [`LoadState::Failed`].
    Failed,
    /// A newer request was issued since; the response was dropped.
    Stale,
}

/// Tracks the current page, total pages and resident records.
#[derive(Debug, Clone)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    records: Vec<Artwork>,
    state: LoadState,
    /// Id of the most recently issued request.
    latest_request: u64,
    /// Whether any page has been applied yet.
    has_loaded: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Create a controller on page 1 of 1 with no records.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            records: Vec::new(),
            state: LoadState::Idle,
            latest_request: 0,
            has_loaded: false,
        }
    }

    /// Request `page`.
    ///
    /// The page is not clamped; boundary checks belong to [`previous`] and
    /// [`next`]. Any request still in flight becomes stale.
    ///
    /// [`previous`]: Pagination::previous
    /// [`next`]: Pagination::next
    pub fn go_to(&mut self, page: u32) -> PageRequest {
        self.latest_request += 1;
        if let LoadState::Loading { page: pending } = self.state {
            debug!(pending, page, "Superseding in-flight page request");
        }
        self.state = LoadState::Loading { page };
        info!(page, request_id = self.latest_request, "Navigating to page");
        PageRequest {
            id: self.latest_request,
            page,
        }
    }

    /// Request the previous page, if that affordance is enabled.
    pub fn previous(&mut self) -> Option<PageRequest> {
        if self.can_previous() {
            Some(self.go_to(self.current_page - 1))
        } else {
            None
        }
    }

    /// Request the next page, if that affordance is enabled.
    pub fn next(&mut self) -> Option<PageRequest> {
        if self.can_next() {
            Some(self.go_to(self.current_page + 1))
        } else {
            None
        }
    }

    /// Whether "previous" is enabled.
    pub fn can_previous(&self) -> bool {
        !self.is_loading() && self.current_page > 1
    }

    /// Whether "next" is enabled.
    pub fn can_next(&self) -> bool {
        !self.is_loading() && self.current_page < self.total_pages
    }

    /// Apply the outcome of request `request_id`.
    pub fn complete(
        &mut self,
        request_id: u64,
        result: Result<ArtworkPage, String>,
    ) -> Completion {
        if request_id != self.latest_request || !self.is_loading() {
            warn!(
                request_id,
                latest = self.latest_request,
                "Dropping stale page response"
            );
            return Completion::Stale;
        }

        match result {
            Ok(page) => {
                self.current_page = page.pagination.current_page.max(1);
                self.total_pages = page.pagination.total_pages.max(1);
                self.records = page.data;
                self.state = LoadState::Idle;
                self.has_loaded = true;
                info!(
                    current_page = self.current_page,
                    total_pages = self.total_pages,
                    records = self.records.len(),
                    "Page loaded"
                );
                Completion::Applied
            }
            Err(message) => {
                let page = match self.state {
                    LoadState::Loading { page } => page,
                    _ => self.current_page,
                };
                warn!(page, error = %message, "Page fetch failed");
                self.state = LoadState::Failed { page, message };
                Completion::Failed
            }
        }
    }

    /// Re-request the page that failed.
    pub fn retry(&mut self) -> Option<PageRequest> {
        match self.state {
            LoadState::Failed { page, .. } => Some(self.go_to(page)),
            _ => None,
        }
    }

    /// Leave the failed state and keep showing the last loaded page.
    ///
    /// Returns false and stays in [`LoadState::Failed`] when no page was ever
    /// loaded, since there is nothing to go back to and `retry` must remain
    /// reachable.
    pub fn dismiss_error(&mut self) -> bool {
        if !matches!(self.state, LoadState::Failed { .. }) {
            return false;
        }
        if !self.has_loaded {
            debug!("No loaded page to return to, keeping the error");
            return false;
        }
        debug!("Dismissed page load error");
        self.state = LoadState::Idle;
        true
    }

    /// The current page (1-based).
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// The total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The records of the current page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Ids of the records of the current page, in order.
    pub fn visible_ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(|a| a.id).collect()
    }

    /// The loading state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// The failure message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
