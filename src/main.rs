use clap::Parser;
use log::LevelFilter;
use pitlane::ViewMode;
use pitlane::core::config::{self, CliOverrides, DEFAULT_LOG_LEVEL};
use pitlane::{logging, tui};
use std::path::Path;

#[derive(Parser)]
#[command(name = "pitlane", about = "Browse Formula 1 drivers and their race results")]
struct Args {
    /// Statistics API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Drivers per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Initial list layout
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Log level written to pitlane.log
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log file first so config loading is logged; the level is settled after resolve
    let _ = logging::init(
        Path::new("pitlane.log"),
        args.log_level.unwrap_or(DEFAULT_LOG_LEVEL),
    );

    // The file may fail to parse; keep going on defaults and report it.
    let loaded = config::load_config();
    let file_config = loaded.as_ref().ok();
    let cli = CliOverrides {
        base_url: args.base_url,
        page_size: args.page_size,
        view_mode: args.view,
        log_level: args.log_level,
    };
    let resolved = config::resolve(file_config.unwrap_or(&Default::default()), &cli);
    logging::set_level(resolved.log_level);

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Pitlane starting up against {} (page size {})",
        resolved.base_url,
        resolved.page_size
    );

    tui::run(resolved)
}
