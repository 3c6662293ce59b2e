/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use galleria::file_utils::FileManager;
use crate::common;

/// Test file and directory existence checks
#[test]
fn test_file_exists_withFileAndDirectory_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.txt", "content")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.txt")));

    Ok(())
}

/// Test that sub-directories come back sorted and files are ignored
#[test]
fn test_list_subdirs_shouldReturnSortedDirectoriesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::touch(temp_dir.path(), "zeta/audio.wav")?;
    common::touch(temp_dir.path(), "alpha/audio.wav")?;
    common::touch(temp_dir.path(), "loose.txt")?;

    let dirs = FileManager::list_subdirs(temp_dir.path())?;
    let names: Vec<String> = dirs
        .iter()
        .map(|dir| dir.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);

    Ok(())
}

/// Test extension grouping order and case-insensitive matching
#[test]
fn test_find_files_withMixedExtensions_shouldGroupInGivenOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::touch(temp_dir.path(), "b.mp3")?;
    common::touch(temp_dir.path(), "a.mp3")?;
    common::touch(temp_dir.path(), "z.WAV")?;
    common::touch(temp_dir.path(), "notes.md")?;
    common::touch(temp_dir.path(), "nested/c.wav")?;

    let audio = FileManager::audio_files(temp_dir.path())?;
    let names: Vec<String> = audio
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["z.WAV", "a.mp3", "b.mp3"]);

    Ok(())
}

/// Test that a leading byte-order mark is dropped on read
#[test]
fn test_read_to_string_withBom_shouldStripIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "bom.srt", "\u{feff}1\nhello")?;

    assert_eq!(FileManager::read_to_string(&file)?, "1\nhello");

    Ok(())
}

/// Test writing into a directory that does not exist yet
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("assets").join("out.json");

    FileManager::write_to_file(&target, "{}")?;
    assert_eq!(std::fs::read_to_string(&target)?, "{}");

    Ok(())
}

/// Test forward-slash relative paths
#[test]
fn test_relative_posix_shouldStripRootAndUseSlashes() {
    let root = Path::new("/srv/site");
    let audio = root.join("demos").join("Speech_Recognition").join("a").join("a.wav");

    assert_eq!(
        FileManager::relative_posix(&audio, root),
        "demos/Speech_Recognition/a/a.wav"
    );
    assert_eq!(FileManager::relative_posix("other/file.mp3", root), "other/file.mp3");
}

