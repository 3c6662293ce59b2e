use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Repository root that demo and asset paths are relative to
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory the manifests are written to, relative to `root`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Per-gallery data locations and manifest names
    #[serde(default)]
    pub galleries: GalleriesConfig,

    /// Alignment behavior
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Demo gallery kind
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gallery {
    // @gallery: word-timed speech recognition demos
    Recognition,
    // @gallery: before/after speech editing demos
    Editing,
    // @gallery: speaker-labelled subtitle demos
    Diarization,
}

impl Gallery {
    /// All galleries in build order
    pub const ALL: [Gallery; 3] = [Gallery::Recognition, Gallery::Editing, Gallery::Diarization];

    // @returns: Human readable gallery name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Recognition => "Speech Recognition",
            Self::Editing => "Speech Editing",
            Self::Diarization => "Speaker Diarization",
        }
    }
}

impl std::fmt::Display for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Recognition => "recognition",
            Self::Editing => "editing",
            Self::Diarization => "diarization",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Gallery {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "recognition" => Ok(Self::Recognition),
            "editing" => Ok(Self::Editing),
            "diarization" => Ok(Self::Diarization),
            _ => Err(anyhow!("Invalid gallery: {}", s)),
        }
    }
}

/// Data directory and manifest file name of one gallery
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryPaths {
    /// Demo data directory, relative to the root
    pub data_dir: String,

    /// Manifest file name inside the assets directory
    pub output: String,
}

/// Locations of every gallery
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GalleriesConfig {
    #[serde(default = "default_recognition_paths")]
    pub recognition: GalleryPaths,

    #[serde(default = "default_editing_paths")]
    pub editing: GalleryPaths,

    #[serde(default = "default_diarization_paths")]
    pub diarization: GalleryPaths,
}

impl Default for GalleriesConfig {
    fn default() -> Self {
        Self {
            recognition: default_recognition_paths(),
            editing: default_editing_paths(),
            diarization: default_diarization_paths(),
        }
    }
}

impl GalleriesConfig {
    pub fn paths(&self, gallery: Gallery) -> &GalleryPaths {
        match gallery {
            Gallery::Recognition => &self.recognition,
            Gallery::Editing => &self.editing,
            Gallery::Diarization => &self.diarization,
        }
    }
}

/// Alignment settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AlignmentConfig {
    /// Reject transcripts whose cues or words are out of chronological
    /// order instead of aligning them with a warning
    #[serde(default)]
    pub strict_ordering: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_recognition_paths() -> GalleryPaths {
    GalleryPaths {
        data_dir: "demos/Speech_Recognition".to_string(),
        output: "speech_recognition_demos.json".to_string(),
    }
}

fn default_editing_paths() -> GalleryPaths {
    GalleryPaths {
        data_dir: "demos/Speech_Editing/multilingual".to_string(),
        output: "speech_editing_demos.json".to_string(),
    }
}

fn default_diarization_paths() -> GalleryPaths {
    GalleryPaths {
        data_dir: "demos/Speaker_Diarization".to_string(),
        output: "speaker_diarization_demos.json".to_string(),
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.root.trim().is_empty() {
            return Err(anyhow!("Root directory must not be empty"));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(anyhow!("Assets directory must not be empty"));
        }

        for gallery in Gallery::ALL {
            let paths = self.galleries.paths(gallery);
            if paths.data_dir.trim().is_empty() {
                return Err(anyhow!("Data directory for {} must not be empty", gallery));
            }
            if !paths.output.ends_with(".json") {
                return Err(anyhow!(
                    "Manifest name for {} must end with .json: '{}'",
                    gallery,
                    paths.output
                ));
            }
        }

        Ok(())
    }

    /// Absolute-or-relative root as a path
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    /// Demo data directory of a gallery
    pub fn data_dir(&self, gallery: Gallery) -> PathBuf {
        self.root_path().join(&self.galleries.paths(gallery).data_dir)
    }

    /// Manifest output path of a gallery
    pub fn output_path(&self, gallery: Gallery) -> PathBuf {
        self.root_path()
            .join(&self.assets_dir)
            .join(&self.galleries.paths(gallery).output)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            root: default_root(),
            assets_dir: default_assets_dir(),
            galleries: GalleriesConfig::default(),
            alignment: AlignmentConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
