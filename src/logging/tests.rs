// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::SILENT);
    assert_eq!(LogLevel::new(6).unwrap(), LogLevel::DUMP);
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(42), None);
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<(u8, &str)> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| (level.as_u8(), level.to_filter_string()))
        .collect();

    insta::assert_debug_snapshot!(filters, @r#"
    [
        (
            0,
            "off",
        ),
        (
            1,
            "error",
        ),
        (
            2,
            "warn",
        ),
        (
            3,
            "info",
        ),
        (
            4,
            "info,r2_meson=debug",
        ),
        (
            5,
            "info,r2_meson=trace",
        ),
        (
            6,
            "trace",
        ),
    ]
    "#);
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(ok, LogLevel::TRACE);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_timestamps());
}

#[test]
fn test_file_layer_creates_parent_and_keeps_existing_lines() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("logs").join("r2-meson.log");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "previous run\n").unwrap();

    let (_layer, guard) =
        super::file_layer::<tracing_subscriber::Registry>(&path, LogLevel::DEBUG).unwrap();
    drop(guard);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
}

#[test]
fn test_file_layer_creates_missing_directories() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("a").join("b").join("build.log");

    let (_layer, _guard) =
        super::file_layer::<tracing_subscriber::Registry>(&path, LogLevel::INFO).unwrap();

    assert!(path.is_file());
}
