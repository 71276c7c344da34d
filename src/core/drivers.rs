//! # Driver Page Store
//!
//! Holds one page of drivers plus the cursor used to fetch it.
//!
//! ```text
//! DriverPageState
//! ├── items: Vec<Driver>        // current page, ≤ limit after a successful load
//! ├── pagination: Pagination    // offset / limit / total
//! ├── status: LoadStatus
//! ├── error: Option<String>     // set only while Failed
//! └── pending: Option<Pending>  // the load we are waiting on
//! ```
//!
//! A failed load leaves `items` and `total` as they were, so the view keeps
//! showing the last good page and the pagination controls keep working.

use log::{debug, warn};

use crate::api::{Driver, DriverPage, FetchError};
use crate::core::load::{LoadStatus, RequestId, RequestSeq};
use crate::core::pagination::Pagination;

pub const DEFAULT_PAGE_SIZE: usize = 30;

const FALLBACK_ERROR: &str = "Failed to load drivers";

#[derive(Debug, Clone, Copy)]
struct Pending {
    request: RequestId,
    offset: usize,
    limit: usize,
}

#[derive(Debug)]
pub struct DriverPageState {
    items: Vec<Driver>,
    pagination: Pagination,
    status: LoadStatus,
    error: Option<String>,
    seq: RequestSeq,
    pending: Option<Pending>,
}

impl Default for DriverPageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DriverPageState {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(0, limit, 0),
            status: LoadStatus::Idle,
            error: None,
            seq: RequestSeq::default(),
            pending: None,
        }
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[Driver] {
        &self.items
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn offset(&self) -> usize {
        self.pagination.offset
    }

    pub fn limit(&self) -> usize {
        self.pagination.limit
    }

    pub fn total(&self) -> usize {
        self.pagination.total
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn find(&self, driver_id: &str) -> Option<&Driver> {
        self.items.iter().find(|d| d.driver_id == driver_id)
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    /// First half of `load(offset, limit)`: enter `Loading` and hand back the
    /// ticket the completion must present. Supersedes any load still pending.
    pub fn begin_load(&mut self, offset: usize, limit: usize) -> RequestId {
        let request = self.seq.issue();
        if let Some(prev) = self.pending.replace(Pending {
            request,
            offset,
            limit: limit.max(1),
        }) {
            debug!("Driver load {} superseded by {}", prev.request, request);
        }
        self.status = LoadStatus::Loading;
        self.error = None;
        request
    }

    /// Second half of `load`: apply the outcome if `request` is still the one
    /// we are waiting for. Returns `false` when the completion was stale.
    pub fn finish_load(
        &mut self,
        request: RequestId,
        result: Result<DriverPage, FetchError>,
    ) -> bool {
        let Some(pending) = self.pending.filter(|p| p.request == request) else {
            debug!("Discarding stale driver page {}", request);
            return false;
        };
        self.pending = None;

        match result {
            Ok(page) => {
                let mut drivers = page.drivers;
                if drivers.len() > pending.limit {
                    warn!(
                        "Server returned {} drivers for limit {}, truncating",
                        drivers.len(),
                        pending.limit
                    );
                    drivers.truncate(pending.limit);
                }
                self.items = drivers;
                self.pagination = Pagination::new(pending.offset, pending.limit, page.total);
                self.status = LoadStatus::Ready;
                self.error = None;
            }
            Err(e) => {
                warn!("Driver page {} failed: {}", request, e);
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                });
                self.status = LoadStatus::Failed;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    /// Moves the cursor without fetching. Returns whether it changed.
    pub fn request_offset(&mut self, offset: usize) -> bool {
        if self.pagination.offset == offset {
            return false;
        }
        self.pagination.offset = offset;
        true
    }

    /// Advances one page if `offset + limit < total`; otherwise a no-op.
    pub fn next_page(&mut self) -> bool {
        match self.pagination.next_offset() {
            Some(offset) => self.request_offset(offset),
            None => false,
        }
    }

    /// Goes back one page if `offset - limit >= 0`; otherwise a no-op.
    pub fn prev_page(&mut self) -> bool {
        match self.pagination.prev_offset() {
            Some(offset) => self.request_offset(offset),
            None => false,
        }
    }
}
