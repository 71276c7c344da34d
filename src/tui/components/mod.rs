//! # TUI Components
//!
//! ## Component Architecture
//!
//! All components here are props-based: they borrow what they show from
//! `App`/`TuiState` for the duration of one frame and hold no state of their
//! own. Selection indices live in `TuiState` and are clamped at render time.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! DriverList::new(app.drivers.items(), tui.view_mode, tui.driver_selected).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! DriverList::render(frame, area); // reads from a global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status bar)
//! ├── driver_list.rs     (driver page, table or cards)
//! ├── driver_details.rs  (single driver profile)
//! ├── race_list.rs       (race results, table or cards)
//! ├── pagination_bar.rs  (Prev / Page p of n / Next)
//! └── status_view.rs     (spinner, error, empty placeholder)
//! ```

mod driver_details;
mod driver_list;
mod pagination_bar;
mod race_list;
mod status_view;
mod title_bar;

pub use driver_details::DriverDetails;
pub use driver_list::DriverList;
pub use pagination_bar::PaginationBar;
pub use race_list::{EMPTY_NOTE, RaceList};
pub use status_view::StatusView;
pub use title_bar::TitleBar;

/// Flattens a test terminal's buffer into one string for `contains` checks.
#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
