//! # Core Application Logic
//!
//! This module contains Pitlane's business logic.
//! It knows nothing about any specific UI technology and performs no I/O.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • DriverPageState      │
//!                    │  • RaceListState        │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │        Runtime          │──── RacingApi (HTTP)
//!                    └───────────┬─────────────┘
//!                                │ Action
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │      TUI adapter        │
//!                    │       (ratatui)         │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct owning both stores
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`drivers`]: Paged driver list store
//! - [`races`]: Per-driver race results store
//! - [`pagination`]: Offset/limit/total arithmetic
//! - [`load`]: Shared load status and request sequencing
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod drivers;
pub mod load;
pub mod pagination;
pub mod races;
pub mod state;

pub use load::{LoadStatus, RequestId};
