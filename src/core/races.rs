//! # Race List Store
//!
//! Race results for one driver at a time. Lives exactly as long as the race
//! results view: `load` when it is entered, `clear` when it is left.
//!
//! Only one bounded page is fetched per driver (`limit` results starting at
//! offset 0). `total` comes back with it so callers can tell the list was
//! cut short.

use log::{debug, warn};

use crate::api::{FetchError, RacePage, RaceResult};
use crate::core::load::{LoadStatus, RequestId, RequestSeq};

pub const DEFAULT_RACES_PAGE_SIZE: usize = 30;

const FALLBACK_ERROR: &str = "Failed to load races";

#[derive(Debug, Default)]
pub struct RaceListState {
    driver_id: Option<String>,
    items: Vec<RaceResult>,
    total: usize,
    status: LoadStatus,
    error: Option<String>,
    seq: RequestSeq,
    pending: Option<RequestId>,
}

impl RaceListState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    /// Driver whose results this state currently belongs to.
    pub fn driver_id(&self) -> Option<&str> {
        self.driver_id.as_deref()
    }

    pub fn items(&self) -> &[RaceResult] {
        &self.items
    }

    /// Total races the API knows for the driver, which may exceed `items().len()`.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_truncated(&self) -> bool {
        self.items.len() < self.total
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

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// First half of `load(driver_id)`. Switching to another driver drops the
    /// previous driver's results on the spot.
    pub fn begin_load(&mut self, driver_id: &str) -> RequestId {
        if self.driver_id.as_deref() != Some(driver_id) {
            self.items.clear();
            self.total = 0;
            self.driver_id = Some(driver_id.to_string());
        }
        let request = self.seq.issue();
        if let Some(prev) = self.pending.replace(request) {
            debug!("Race load {} superseded by {}", prev, request);
        }
        self.status = LoadStatus::Loading;
        self.error = None;
        request
    }

    /// Second half of `load`. Returns `false` when the completion belongs to
    /// a superseded or cleared load and was dropped.
    pub fn finish_load(&mut self, request: RequestId, result: Result<RacePage, FetchError>) -> bool {
        if self.pending != Some(request) {
            debug!("Discarding stale race results {}", request);
            return false;
        }
        self.pending = None;

        match result {
            Ok(page) => {
                self.items = page.races;
                self.total = page.total.max(self.items.len());
                self.status = LoadStatus::Ready;
                self.error = None;
            }
            Err(e) => {
                warn!("Race results {} failed: {}", request, e);
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

    /// Resets to empty `Idle`. Anything still in flight is orphaned.
    pub fn clear(&mut self) {
        if let Some(request) = self.pending.take() {
            debug!("Clearing race list with {} in flight", request);
        }
        self.driver_id = None;
        self.items.clear();
        self.total = 0;
        self.status = LoadStatus::Idle;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::race_page;

    #[test]
    fn test_load_cycle() {
        let mut state = RaceListState::new();
        assert_eq!(state.status(), LoadStatus::Idle);

        let request = state.begin_load("hamilton");
        assert!(state.is_loading());
        assert_eq!(state.driver_id(), Some("hamilton"));

        assert!(state.finish_load(request, Ok(race_page(3, 3))));
        assert_eq!(state.status(), LoadStatus::Ready);
        assert_eq!(state.items().len(), 3);
        assert!(!state.is_truncated());
    }

    #[test]
    fn test_truncated_when_total_exceeds_page() {
        let mut state = RaceListState::new();
        let request = state.begin_load("hamilton");
        state.finish_load(request, Ok(race_page(30, 356)));
        assert!(state.is_truncated());
        assert_eq!(state.total(), 356);
    }

    #[test]
    fn test_clear_before_resolution_discards_result() {
        let mut state = RaceListState::new();
        let request = state.begin_load("hamilton");
        state.clear();

        assert!(!state.finish_load(request, Ok(race_page(5, 5))));
        assert_eq!(state.status(), LoadStatus::Idle);
        assert!(state.items().is_empty());
        assert!(state.driver_id().is_none());
    }

    #[test]
    fn test_switching_driver_drops_previous_results() {
        let mut state = RaceListState::new();
        let request = state.begin_load("hamilton");
        state.finish_load(request, Ok(race_page(4, 4)));

        let request = state.begin_load("alonso");
        assert!(state.items().is_empty());

        state.finish_load(request, Err(FetchError::Network("timeout".into())));
        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_same_driver_results() {
        let mut state = RaceListState::new();
        let request = state.begin_load("hamilton");
        state.finish_load(request, Ok(race_page(4, 4)));

        let request = state.begin_load("hamilton");
        state.finish_load(request, Err(FetchError::Parse("eof".into())));

        assert_eq!(state.status(), LoadStatus::Failed);
        assert_eq!(state.error_message(), Some("parse error: eof"));
        assert_eq!(state.items().len(), 4);
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut state = RaceListState::new();
        let stale = state.begin_load("hamilton");
        let fresh = state.begin_load("verstappen");

        assert!(!state.finish_load(stale, Ok(race_page(9, 9))));
        assert!(state.is_loading());
        assert!(state.finish_load(fresh, Ok(race_page(2, 2))));
        assert_eq!(state.driver_id(), Some("verstappen"));
        assert_eq!(state.items().len(), 2);
    }
}
