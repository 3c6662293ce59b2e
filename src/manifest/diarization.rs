/*!
 * Speaker diarization gallery: recordings with speaker-labelled cues.
 */

use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use super::{generated_at, listing_error, read_asset_or_skip, title_from_id};
use crate::errors::ManifestError;
use crate::file_utils::FileManager;
use crate::transcript::{Diagnostics, Segment, parse_segments_with_diagnostics};

/// A cue with its speaker, empty when unlabelled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerCue {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    pub text: String,
}

impl From<Segment> for SpeakerCue {
    fn from(segment: Segment) -> Self {
        Self {
            start: segment.start(),
            end: segment.end(),
            speaker: segment.speaker.unwrap_or_default(),
            text: segment.text,
        }
    }
}

/// One recording in the gallery
#[derive(Debug, Clone, Serialize)]
pub struct DiarizationDemo {
    pub id: String,
    pub title: String,
    pub audio: String,
    pub subtitles: Vec<SpeakerCue>,
}

/// Speaker diarization manifest payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiarizationManifest {
    pub generated_at: String,
    pub demos: Vec<DiarizationDemo>,
}

/// Build the manifest for every folder under `data_dir` holding both an
/// audio file and readable subtitle cues. A missing directory yields no
/// demos.
pub fn build_diarization_manifest(data_dir: &Path, root: &Path) -> Result<DiarizationManifest, ManifestError> {
    let mut demos = Vec::new();
    let mut diagnostics = Diagnostics::new();

    if FileManager::dir_exists(data_dir) {
        let folders = FileManager::list_subdirs(data_dir).map_err(|e| listing_error(data_dir, e))?;

        for folder in folders {
            let audio_files = FileManager::audio_files(&folder).map_err(|e| listing_error(&folder, e))?;
            let subtitle_files = FileManager::subtitle_files(&folder).map_err(|e| listing_error(&folder, e))?;
            let (Some(audio), Some(srt)) = (audio_files.first(), subtitle_files.first()) else {
                debug!("Skipping {:?}: missing audio or subtitles", folder);
                continue;
            };

            let Some(raw_cues) = read_asset_or_skip(srt) else {
                continue;
            };

            let mut folder_diagnostics = Diagnostics::new();
            let segments = parse_segments_with_diagnostics(&raw_cues, &mut folder_diagnostics);
            if !folder_diagnostics.is_clean() {
                debug!("{:?}: {}", srt, folder_diagnostics);
            }
            diagnostics.merge(&folder_diagnostics);

            let id = folder
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            demos.push(DiarizationDemo {
                title: title_from_id(&id),
                audio: FileManager::relative_posix(audio, root),
                subtitles: segments.into_iter().map(SpeakerCue::from).collect(),
                id,
            });
        }
    } else {
        warn!("Speaker diarization directory not found: {:?}", data_dir);
    }

    if !diagnostics.is_clean() {
        warn!("Speaker diarization input issues: {}", diagnostics);
    }
    info!("Collected {} speaker diarization demos", demos.len());

    Ok(DiarizationManifest {
        generated_at: generated_at(),
        demos,
    })
}
