//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use scened::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SCENED_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SCENED_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("SCENED_INPUT__ZOOM_SCALE", "1.25");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.input.zoom_scale, 1.25);
    std::env::remove_var("SCENED_INPUT__ZOOM_SCALE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("SCENED_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.input.camera_res, 0.01);
    assert_eq!(config.camera.orbit_distance, 10.0);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.scene.name, "Scene 1");
}
