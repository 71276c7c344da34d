use std::fs;

use log::LevelFilter;
use pitlane::core::config::{self, CliOverrides, GeneralConfig, PitlaneConfig};
use pitlane::logging;

// One test per binary: the logger is process-global.
#[test]
fn test_config_loading_is_logged() {
    let dir = std::env::temp_dir().join(format!("pitlane-log-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let log_path = dir.join("pitlane.log");
    logging::init(&log_path, LevelFilter::Info).unwrap();

    // First run: no file yet, a default gets generated
    let config_path = dir.join("home").join("config.toml");
    config::load_config_from(&config_path).unwrap();
    assert!(config_path.exists());

    let file_config = PitlaneConfig {
        general: GeneralConfig {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let resolved = config::resolve(&file_config, &CliOverrides::default());
    logging::set_level(resolved.log_level);
    assert_eq!(log::max_level(), config::DEFAULT_LOG_LEVEL);

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("No config file found"), "log was: {contents}");
    assert!(contents.contains("Unknown log_level \"chatty\""), "log was: {contents}");

    fs::remove_dir_all(&dir).ok();
}
