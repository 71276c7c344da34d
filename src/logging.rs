//! File logging.
//!
//! The logger is installed before the config is read, so messages from
//! config loading land in the file too. The sink accepts everything; the
//! effective level is the `log` crate's max level, which can be narrowed
//! once the final level is known.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Creates (truncates) `path` and routes the `log` macros to it at `level`.
pub fn init(path: &Path, level: LevelFilter) -> std::io::Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)?;
    WriteLogger::init(LevelFilter::Trace, log_config, log_file).map_err(std::io::Error::other)?;
    set_level(level);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
