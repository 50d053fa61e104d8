//! Integration tests for logger behavior.

use studyboard::logger::{init_file_logging, level, set_level, set_level_from_str, Level};
use studyboard::{debug, error, info, warn};
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert_eq!(level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_parent_dirs() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("logs").join("studyboard.log");

    assert!(init_file_logging(&path));
    error!("written to file");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[ERROR] written to file"));
}
