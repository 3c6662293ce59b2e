/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::PathBuf;
use galleria::app_config::{Config, Gallery, LogLevel};
use crate::common;

/// Test the default gallery layout
#[test]
fn test_default_config_shouldUseStandardLayout() {
    let config = Config::default();

    assert_eq!(config.root, ".");
    assert_eq!(config.assets_dir, "assets");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.alignment.strict_ordering);
    assert_eq!(
        config.data_dir(Gallery::Editing),
        PathBuf::from(".").join("demos/Speech_Editing/multilingual")
    );
    assert_eq!(
        config.output_path(Gallery::Recognition),
        PathBuf::from(".").join("assets").join("speech_recognition_demos.json")
    );
    assert!(config.validate().is_ok());
}

/// Test that a partial config file is completed with defaults
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{
            "root": "/srv/site",
            "galleries": {
                "diarization": {"data_dir": "demos/Speakers", "output": "speakers.json"}
            },
            "alignment": {"strict_ordering": true},
            "log_level": "debug"
        }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.assets_dir, "assets");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.alignment.strict_ordering);
    assert_eq!(config.data_dir(Gallery::Diarization), PathBuf::from("/srv/site/demos/Speakers"));
    assert_eq!(
        config.galleries.paths(Gallery::Recognition).output,
        "speech_recognition_demos.json"
    );

    Ok(())
}

/// Test the save and load cycle preserves settings
#[test]
fn test_save_thenLoad_shouldPreserveSettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.assets_dir = "public/data".to_string();
    config.log_level = LogLevel::Warn;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.assets_dir, "public/data");
    assert_eq!(loaded.log_level, LogLevel::Warn);

    Ok(())
}

/// Test validation failures
#[test]
fn test_validate_withInvalidValues_shouldError() {
    let mut config = Config::default();
    config.root = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.galleries.editing.output = "editing.yaml".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.galleries.recognition.data_dir = String::new();
    assert!(config.validate().is_err());
}

/// Test malformed config files
#[test]
fn test_from_file_withInvalidJson_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    assert!(Config::from_file(temp_dir.path().join("absent.json")).is_err());

    Ok(())
}

/// Test gallery name parsing
#[test]
fn test_gallery_from_str_shouldAcceptAnyCase() {
    assert_eq!("Recognition".parse::<Gallery>().unwrap(), Gallery::Recognition);
    assert_eq!("DIARIZATION".parse::<Gallery>().unwrap(), Gallery::Diarization);
    assert!("translation".parse::<Gallery>().is_err());
    assert_eq!(Gallery::Editing.to_string(), "editing");
    assert_eq!(Gallery::Editing.display_name(), "Speech Editing");
}
