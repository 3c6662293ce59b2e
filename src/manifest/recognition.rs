/*!
 * Speech recognition gallery: recordings with word-timed sentences.
 *
 * Each demo folder holds an audio file, a word-level transcript (`json` or
 * `txt`) and optionally subtitle cues (`srt`). Cues become the sentences;
 * without them the whole transcript becomes one sentence.
 */

use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use super::{file_stem, generated_at, listing_error, read_asset_or_skip, title_from_id};
use crate::errors::ManifestError;
use crate::file_utils::FileManager;
use crate::transcript::timing::round_millis;
use crate::transcript::{
    Aligner, Diagnostics, Segment, load_word_data, normalize_words_with_diagnostics,
    parse_segments_with_diagnostics,
};

/// One recording in the gallery
#[derive(Debug, Clone, Serialize)]
pub struct RecognitionDemo {
    pub id: String,
    pub title: String,
    pub language: String,
    /// Audio path relative to the root
    pub audio: String,
    /// Recording length in seconds
    pub duration: f64,
    pub sentences: Vec<Segment>,
}

/// Speech recognition manifest payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionManifest {
    pub generated_at: String,
    pub demos: Vec<RecognitionDemo>,
}

/// Build the demo for one folder.
///
/// Returns `Ok(None)` for folders without audio or a transcript, and for
/// folders whose transcript or cues cannot be read or hold no usable words.
pub fn build_recognition_demo(
    folder: &Path,
    root: &Path,
    aligner: &Aligner,
    diagnostics: &mut Diagnostics,
) -> Result<Option<RecognitionDemo>, ManifestError> {
    let audio_files = FileManager::audio_files(folder).map_err(|e| listing_error(folder, e))?;
    let transcript_files = FileManager::transcript_files(folder).map_err(|e| listing_error(folder, e))?;
    let subtitle_files = FileManager::subtitle_files(folder).map_err(|e| listing_error(folder, e))?;

    let (Some(audio), Some(transcript)) = (audio_files.first(), transcript_files.first()) else {
        debug!("Skipping {:?}: missing audio or transcript", folder);
        return Ok(None);
    };

    let Some(raw_words) = read_asset_or_skip(transcript) else {
        return Ok(None);
    };
    let data = match load_word_data(&raw_words) {
        Ok(data) => data,
        Err(e) => {
            warn!("Skipping {:?}: {}", transcript, e);
            return Ok(None);
        }
    };

    let words = normalize_words_with_diagnostics(&data.words, diagnostics);
    let Some(last_word) = words.last() else {
        debug!("Skipping {:?}: no usable words", folder);
        return Ok(None);
    };
    let duration = round_millis(data.end.unwrap_or(last_word.end()));

    let segments = match subtitle_files.first() {
        Some(srt) => {
            let Some(raw_cues) = read_asset_or_skip(srt) else {
                return Ok(None);
            };
            parse_segments_with_diagnostics(&raw_cues, diagnostics)
        }
        None => Vec::new(),
    };
    let sentences = aligner.align(segments, &words, diagnostics)?;

    let id = folder
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_stem(folder));
    let language = data
        .lang
        .clone()
        .unwrap_or_else(|| id.rsplit('_').next().unwrap_or_default().to_string())
        .to_lowercase();

    Ok(Some(RecognitionDemo {
        title: title_from_id(&id),
        language,
        audio: FileManager::relative_posix(audio, root),
        duration,
        sentences,
        id,
    }))
}

/// Build the manifest for every demo folder under `data_dir`.
///
/// A missing data directory yields an empty manifest.
pub fn build_recognition_manifest(
    data_dir: &Path,
    root: &Path,
    aligner: &Aligner,
) -> Result<RecognitionManifest, ManifestError> {
    let mut demos = Vec::new();
    let mut diagnostics = Diagnostics::new();

    if FileManager::dir_exists(data_dir) {
        let folders = FileManager::list_subdirs(data_dir).map_err(|e| listing_error(data_dir, e))?;
        for folder in folders {
            let mut folder_diagnostics = Diagnostics::new();
            let demo = build_recognition_demo(&folder, root, aligner, &mut folder_diagnostics)?;
            if !folder_diagnostics.is_clean() {
                debug!("{:?}: {}", folder, folder_diagnostics);
            }
            diagnostics.merge(&folder_diagnostics);
            demos.extend(demo);
        }
    } else {
        warn!("Speech recognition directory not found: {:?}", data_dir);
    }

    if !diagnostics.is_clean() {
        warn!("Speech recognition input issues: {}", diagnostics);
    }
    info!("Collected {} speech recognition demos", demos.len());

    Ok(RecognitionManifest {
        generated_at: generated_at(),
        demos,
    })
}
