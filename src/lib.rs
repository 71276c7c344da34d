//! Pitlane library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod logging;
pub mod runtime;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How lists are laid out: one row per item, or one bordered card per item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggle(self) -> ViewMode {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "Table View",
            ViewMode::Cards => "Card View",
        }
    }
}
