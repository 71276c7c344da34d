//! # Load Lifecycle
//!
//! Shared by both stores:
//!
//! ```text
//! Idle ──load──► Loading ──ok──► Ready
//!                   │
//!                   └──err──► Failed
//!
//! Ready / Failed ──load──► Loading   (nothing retries on its own)
//! ```
//!
//! Every `load` is stamped with a [`RequestId`]. A completion is applied only
//! if its id is still the one the store is waiting for, so the state always
//! reflects the most recently *requested* load, whatever order the responses
//! come back in.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

impl LoadStatus {
    pub fn label(self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Ready => "ready",
            LoadStatus::Failed => "failed",
        }
    }
}

/// Ticket identifying one `load` call on one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing [`RequestId`]s.
#[derive(Debug, Default)]
pub struct RequestSeq {
    last: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}
