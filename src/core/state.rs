//! # Application State
//!
//! Core business state for Pitlane. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── drivers: DriverPageState   // paged driver list + cursor
//! ├── races: RaceListState       // one driver's race results
//! ├── races_page_size: usize     // results fetched per driver
//! └── status_message: String     // status bar text
//! ```
//!
//! Both stores are plain values owned by `App`, which is constructed
//! explicitly and handed to whoever drives it. There are no globals, so
//! every test starts from a fresh `App`.

use crate::core::config::ResolvedConfig;
use crate::core::drivers::{DEFAULT_PAGE_SIZE, DriverPageState};
use crate::core::races::{DEFAULT_RACES_PAGE_SIZE, RaceListState};

pub struct App {
    pub drivers: DriverPageState,
    pub races: RaceListState,
    pub races_page_size: usize,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_RACES_PAGE_SIZE)
    }
}

impl App {
    pub fn new(page_size: usize, races_page_size: usize) -> Self {
        Self {
            drivers: DriverPageState::new(page_size),
            races: RaceListState::new(),
            races_page_size: races_page_size.max(1),
            status_message: String::from("Welcome to Pitlane!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.page_size, config.races_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::load::LoadStatus;

    #[test]
    fn test_app_new_defaults() {
        let app = App::default();
        assert_eq!(app.status_message, "Welcome to Pitlane!");
        assert_eq!(app.drivers.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(app.drivers.offset(), 0);
        assert_eq!(app.races.status(), LoadStatus::Idle);
        assert_eq!(app.races_page_size, DEFAULT_RACES_PAGE_SIZE);
    }

    #[test]
    fn test_app_from_config() {
        let config = ResolvedConfig {
            base_url: "http://localhost".to_string(),
            timeout: None,
            page_size: 12,
            races_page_size: 50,
            view_mode: crate::ViewMode::Cards,
            log_level: log::LevelFilter::Off,
        };
        let app = App::from_config(&config);
        assert_eq!(app.drivers.limit(), 12);
        assert_eq!(app.races_page_size, 50);
    }
}
