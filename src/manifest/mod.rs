/*!
 * Gallery manifest builders.
 *
 * Each builder scans one demo directory layout, runs the transcript or
 * edit parsers over the files it finds, and returns a serializable manifest
 * for the front end:
 * - `recognition`: word-timed sentences per recording
 * - `editing`: before/after edit transcripts per language
 * - `diarization`: speaker-labelled cues per recording
 */

pub mod diarization;
pub mod editing;
pub mod recognition;

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use crate::errors::ManifestError;
use crate::file_utils::FileManager;

pub use diarization::{DiarizationDemo, DiarizationManifest, build_diarization_manifest};
pub use editing::{EditingExample, EditingManifest, build_editing_manifest};
pub use recognition::{RecognitionDemo, RecognitionManifest, build_recognition_manifest};

/// Current UTC time in RFC 3339 form for the `generatedAt` field
pub fn generated_at() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Human readable title from a demo folder name: underscores become
/// spaces and each word is capitalized.
pub fn title_from_id(id: &str) -> String {
    let mut title = String::with_capacity(id.len());
    let mut in_word = false;

    for c in id.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }

    title
}

/// Serialize a manifest as pretty JSON and write it, creating parent
/// directories as needed
pub fn write_manifest<T: Serialize, P: AsRef<Path>>(manifest: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;

    FileManager::write_to_file(path, &json)?;
    info!("Wrote {}", path.display());

    Ok(())
}

/// Read a demo asset, mapping failures to a manifest error
pub(crate) fn read_asset(path: &Path) -> Result<String, ManifestError> {
    FileManager::read_to_string(path).map_err(|e| ManifestError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read a demo asset, logging and returning `None` when it cannot be read
/// so the caller can skip that demo and keep building the gallery
pub(crate) fn read_asset_or_skip(path: &Path) -> Option<String> {
    match read_asset(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Skipping {:?}: {}", path, e);
            None
        }
    }
}

/// Map a directory listing failure to a manifest error
pub(crate) fn listing_error(path: &Path, error: anyhow::Error) -> ManifestError {
    ManifestError::Read {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

/// File name stem as an owned string
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
