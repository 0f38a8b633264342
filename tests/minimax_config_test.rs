//! Tests for loading play configuration from disk.

use std::io::Write;
use strictly_minimax::PlayConfig;
use strictly_tictactoe::Player;

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"").unwrap();
    writeln!(file, "show_hints = true").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human(), Player::O);
    assert!(*config.show_hints());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
