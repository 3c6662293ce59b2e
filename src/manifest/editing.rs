/*!
 * Speech editing gallery: edit-annotated transcripts with before/after audio.
 *
 * Files are named `<id>_<language>.txt`, with `<id>_<language>.mp3` holding
 * the original recording and `<id>_<language>_edit.mp3` the edited one.
 */

use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use super::{file_stem, generated_at, listing_error, read_asset_or_skip};
use crate::editing::{DiffSegment, parse_edit_markers};
use crate::errors::ManifestError;
use crate::file_utils::FileManager;
use crate::language_utils::language_labels;

/// Language of an example with its display labels
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: String,
    pub label_native: String,
    pub label_english: String,
}

/// Flat transcript text before and after the edit
#[derive(Debug, Clone, Serialize)]
pub struct EditTexts {
    pub original: String,
    pub edited: String,
}

/// Audio paths before and after the edit, empty when missing
#[derive(Debug, Clone, Serialize)]
pub struct EditAudio {
    pub before: String,
    pub after: String,
}

/// One edit example
#[derive(Debug, Clone, Serialize)]
pub struct EditingExample {
    pub id: String,
    pub language: LanguageInfo,
    pub segments: Vec<DiffSegment>,
    pub text: EditTexts,
    pub audio: EditAudio,
}

/// Speech editing manifest payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingManifest {
    pub generated_at: String,
    pub example_count: usize,
    pub examples: Vec<EditingExample>,
}

/// Build the example for one annotated transcript.
///
/// Returns `Ok(None)` when the file name carries no language suffix or the
/// transcript cannot be read.
pub fn build_editing_example(txt_file: &Path, root: &Path) -> Result<Option<EditingExample>, ManifestError> {
    let base = file_stem(txt_file);
    let Some((_, language_code)) = base.split_once('_') else {
        warn!("Skip '{}' – missing language suffix", base);
        return Ok(None);
    };

    let Some(content) = read_asset_or_skip(txt_file) else {
        return Ok(None);
    };
    let document = parse_edit_markers(content.trim());
    debug!("{}: {} edited spans", base, document.diff_count());

    let before_audio = txt_file.with_extension("mp3");
    let after_audio = txt_file.with_file_name(format!("{}_edit.mp3", base));
    let audio_path = |path: &Path| {
        if FileManager::file_exists(path) {
            FileManager::relative_posix(path, root)
        } else {
            String::new()
        }
    };

    let (label_native, label_english) = language_labels(language_code);

    Ok(Some(EditingExample {
        language: LanguageInfo {
            code: language_code.to_string(),
            label_native,
            label_english,
        },
        segments: document.segments,
        text: EditTexts {
            original: document.original,
            edited: document.edited,
        },
        audio: EditAudio {
            before: audio_path(&before_audio),
            after: audio_path(&after_audio),
        },
        id: base,
    }))
}

/// Build the manifest for every `*.txt` transcript in `data_dir`
pub fn build_editing_manifest(data_dir: &Path, root: &Path) -> Result<EditingManifest, ManifestError> {
    if !FileManager::dir_exists(data_dir) {
        return Err(ManifestError::MissingDirectory(data_dir.display().to_string()));
    }

    let mut examples = Vec::new();
    let txt_files = FileManager::find_files(data_dir, &["txt"]).map_err(|e| listing_error(data_dir, e))?;
    for txt_file in txt_files {
        if let Some(example) = build_editing_example(&txt_file, root)? {
            examples.push(example);
        }
    }

    info!("Collected {} speech editing examples", examples.len());

    Ok(EditingManifest {
        generated_at: generated_at(),
        example_count: examples.len(),
        examples,
    })
}
