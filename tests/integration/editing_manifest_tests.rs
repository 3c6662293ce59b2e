/*!
 * Integration tests for the speech editing gallery
 */

use anyhow::Result;
use galleria::ManifestError;
use galleria::editing::DiffSegment;
use galleria::manifest::build_editing_manifest;
use crate::common;

/// Test an example with both recordings present
#[test]
fn test_build_editing_manifest_withFullExample_shouldCollectEverything() -> Result<()> {
    let root = common::create_temp_dir()?;
    let data_dir = root.path().join("demos/Speech_Editing/multilingual");
    common::create_test_file(&data_dir, "story_de.txt", "\u{feff}Der 【Hund】/【Kater】 schläft.\n")?;
    common::touch(&data_dir, "story_de.mp3")?;
    common::touch(&data_dir, "story_de_edit.mp3")?;

    let manifest = build_editing_manifest(&data_dir, root.path())?;
    assert_eq!(manifest.example_count, 1);

    let example = &manifest.examples[0];
    assert_eq!(example.id, "story_de");
    assert_eq!(example.language.code, "de");
    assert_eq!(example.language.label_english, "German");
    assert_eq!(example.language.label_native, "Deutsch");
    assert_eq!(example.segments[1], DiffSegment::diff("Hund", "Kater"));
    assert_eq!(example.text.original, "Der Hund schläft.");
    assert_eq!(example.text.edited, "Der Kater schläft.");
    assert_eq!(example.audio.before, "demos/Speech_Editing/multilingual/story_de.mp3");
    assert_eq!(example.audio.after, "demos/Speech_Editing/multilingual/story_de_edit.mp3");

    Ok(())
}

/// Test missing recordings and files without a language suffix
#[test]
fn test_build_editing_manifest_withPartialExamples_shouldFillBlanks() -> Result<()> {
    let root = common::create_temp_dir()?;
    let data_dir = root.path().join("edits");
    common::create_test_file(&data_dir, "news_zh-CN.txt", "今天【下雨】/【晴天】。")?;
    common::create_test_file(&data_dir, "README.txt", "not an example")?;
    common::touch(&data_dir, "news_zh-CN.mp3")?;

    let manifest = build_editing_manifest(&data_dir, root.path())?;
    assert_eq!(manifest.example_count, 1);

    let example = &manifest.examples[0];
    assert_eq!(example.language.code, "zh-CN");
    assert_eq!(example.language.label_english, "Chinese");
    assert_eq!(example.audio.before, "edits/news_zh-CN.mp3");
    assert_eq!(example.audio.after, "");

    Ok(())
}

/// Test that an unreadable transcript is skipped
#[test]
fn test_build_editing_manifest_withUnreadableTranscript_shouldSkipIt() -> Result<()> {
    let root = common::create_temp_dir()?;
    common::create_binary_file(root.path(), "broken_en.txt")?;
    common::create_test_file(root.path(), "fine_en.txt", "a【b】/【c】")?;

    let manifest = build_editing_manifest(root.path(), root.path())?;
    assert_eq!(manifest.example_count, 1);
    assert_eq!(manifest.examples[0].id, "fine_en");

    Ok(())
}

/// Test that a missing data directory is an error for this gallery
#[test]
fn test_build_editing_manifest_withMissingDir_shouldError() -> Result<()> {
    let root = common::create_temp_dir()?;
    let result = build_editing_manifest(&root.path().join("absent"), root.path());
    assert!(matches!(result, Err(ManifestError::MissingDirectory(_))));

    Ok(())
}

/// Test the serialized field names the front end reads
#[test]
fn test_editing_manifest_serialization_shouldUseCamelCase() -> Result<()> {
    let root = common::create_temp_dir()?;
    common::create_test_file(root.path(), "x_en.txt", "plain text")?;

    let manifest = build_editing_manifest(root.path(), root.path())?;
    let value = serde_json::to_value(&manifest)?;

    assert_eq!(value["exampleCount"], 1);
    assert!(value["generatedAt"].is_string());
    assert_eq!(value["examples"][0]["language"]["labelEnglish"], "English");
    assert_eq!(value["examples"][0]["segments"][0]["type"], "text");

    Ok(())
}
