use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities for demo galleries

const AUDIO_EXTENSIONS: [&str; 2] = ["wav", "mp3"];
const TRANSCRIPT_EXTENSIONS: [&str; 2] = ["json", "txt"];
const SUBTITLE_EXTENSIONS: [&str; 1] = ["srt"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// List the immediate sub-directories of a directory, sorted by name
    pub fn list_subdirs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.file_type().is_dir() {
                result.push(entry.into_path());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Find files directly inside a directory whose extension matches one of
    /// `extensions` (case-insensitive). Results are grouped by extension in
    /// the order given, each group sorted by name.
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut candidates = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.file_type().is_file() {
                candidates.push(entry.into_path());
            }
        }
        candidates.sort();

        let mut result = Vec::new();
        for wanted in extensions {
            let wanted = wanted.trim_start_matches('.');
            result.extend(
                candidates
                    .iter()
                    .filter(|path| {
                        path.extension()
                            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
                    })
                    .cloned(),
            );
        }

        Ok(result)
    }

    /// Read a UTF-8 file to a string, dropping a leading byte-order mark
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;

        Ok(match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Path of `path` relative to `root` with forward slashes, as the
    /// front end expects. Paths outside `root` are returned unchanged.
    pub fn relative_posix<P1: AsRef<Path>, P2: AsRef<Path>>(path: P1, root: P2) -> String {
        let path = path.as_ref();
        let relative = path.strip_prefix(root.as_ref()).unwrap_or(path);

        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Audio files directly inside a demo folder, `wav` before `mp3`
    pub fn audio_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        Self::find_files(dir, &AUDIO_EXTENSIONS)
    }

    /// Word transcript files directly inside a demo folder, `json` before `txt`
    pub fn transcript_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        Self::find_files(dir, &TRANSCRIPT_EXTENSIONS)
    }

    /// Subtitle files directly inside a demo folder
    pub fn subtitle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        Self::find_files(dir, &SUBTITLE_EXTENSIONS)
    }
}

