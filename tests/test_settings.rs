use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use super_jumper::{GameError, Settings};

fn write_settings(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn defaults() {
    let s = Settings::default();
    assert_eq!(s.target_fps, 60);
    assert!(s.sound);
    assert_eq!(s.asset_dir, PathBuf::from("assets"));
    assert_eq!(s.seed, None);
}

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Settings::load(&dir.path().join("nope.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_settings(r#"{ "target_fps": 30, "seed": 99 }"#);
    let s = Settings::load(file.path()).unwrap().unwrap();
    assert_eq!(s.target_fps, 30);
    assert_eq!(s.seed, Some(99));
    assert!(s.sound);
    assert_eq!(s.asset_dir, PathBuf::from("assets"));
}

#[test]
fn null_log_file_disables_logging() {
    let file = write_settings(r#"{ "log_file": null }"#);
    let s = Settings::load(file.path()).unwrap().unwrap();
    assert_eq!(s.log_file, None);
}

#[test]
fn malformed_file_is_reported() {
    let file = write_settings("{ target_fps: ");
    assert!(matches!(
        Settings::load(file.path()),
        Err(GameError::SettingsParse { .. })
    ));
}

#[test]
fn frame_interval_follows_fps() {
    let mut s = Settings::default();
    s.target_fps = 50;
    assert_eq!(s.frame_interval(), Duration::from_millis(20));
    s.target_fps = 0;
    assert_eq!(s.frame_interval(), Duration::from_secs(1));
}

#[test]
fn settings_round_trip_through_json() {
    let mut s = Settings::default();
    s.seed = Some(5);
    s.sound = false;
    let json = serde_json::to_string(&s).unwrap();
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
