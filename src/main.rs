// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use galleria::AppError;
use galleria::app_config::{self, Config, Gallery};
use galleria::editing::parse_edit_markers;
use galleria::file_utils::FileManager;
use galleria::manifest::{self, build_diarization_manifest, build_editing_manifest, build_recognition_manifest};
use galleria::transcript::{Aligner, Diagnostics, load_word_data, normalize_words_with_diagnostics, parse_segments_with_diagnostics};

/// CLI Wrapper for Gallery to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliGallery {
    Recognition,
    Editing,
    Diarization,
}

impl From<CliGallery> for Gallery {
    fn from(cli_gallery: CliGallery) -> Self {
        match cli_gallery {
            CliGallery::Recognition => Gallery::Recognition,
            CliGallery::Editing => Gallery::Editing,
            CliGallery::Diarization => Gallery::Diarization,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build gallery manifests (all galleries when none is given)
    Build {
        /// Gallery to build
        #[arg(value_enum)]
        gallery: Option<CliGallery>,
    },

    /// Align word timings to subtitle cues and print the sentences as JSON
    Align {
        /// Word-level transcript (JSON or literal-object syntax)
        #[arg(value_name = "WORDS")]
        words: PathBuf,

        /// Subtitle file with the sentence cues
        #[arg(long)]
        srt: Option<PathBuf>,
    },

    /// Parse an edit-annotated transcript and print it as JSON
    Diff {
        /// Transcript containing 【before】/【after】 markers
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completions for galleria
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Galleria - demo gallery manifest builder
///
/// Scans demo folders, aligns transcripts and edit annotations, and writes
/// the JSON manifests consumed by the gallery front end.
#[derive(Parser, Debug)]
#[command(name = "galleria")]
#[command(version)]
#[command(about = "Demo gallery manifest builder")]
#[command(long_about = "Galleria scans demo folders and writes the JSON manifests the gallery front end reads.

EXAMPLES:
    galleria build                              # Build every gallery manifest
    galleria build recognition                  # Build one gallery
    galleria --root site/ build                 # Use another repository root
    galleria --strict build recognition         # Reject out-of-order transcripts
    galleria align words.json --srt talk.srt    # Print aligned sentences
    galleria diff V-0000_zh-CN.txt              # Print diff segments
    galleria completions bash > galleria.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Repository root overriding the configured one
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Reject transcripts whose cues or words are out of order
    #[arg(long, global = true)]
    strict: bool,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "\x1B[1;31m"),
            Level::Warn => ("WARN ", "\x1B[1;33m"),
            Level::Info => ("INFO ", "\x1B[1;32m"),
            Level::Debug => ("DEBUG", "\x1B[1;36m"),
            Level::Trace => ("TRACE", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start permissive; the effective level is applied once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "galleria", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let aligner = Aligner::new().with_strict_ordering(config.alignment.strict_ordering);

    match cli.command {
        Commands::Build { gallery } => {
            let galleries = match gallery {
                Some(gallery) => vec![gallery.into()],
                None => Gallery::ALL.to_vec(),
            };
            for gallery in galleries {
                build_gallery(&config, gallery, &aligner)?;
            }
            Ok(())
        }
        Commands::Align { words, srt } => {
            run_align(&words, srt.as_deref(), &aligner)?;
            Ok(())
        }
        Commands::Diff { file } => run_diff(&file),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load or create the configuration, then apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config, AppError> {
    let config_path = Path::new(&cli.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path).map_err(|e| AppError::Config(format!("{:#}", e)))?
    } else {
        warn!("Config file not found at '{}', creating default config.", cli.config_path);
        let config = Config::default();
        config.save(config_path).map_err(|e| AppError::File(format!("{:#}", e)))?;
        config
    };

    if let Some(root) = &cli.root {
        config.root = root.to_string_lossy().to_string();
    }
    if cli.strict {
        config.alignment.strict_ordering = true;
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config
        .validate()
        .map_err(|e| AppError::Config(format!("{:#}", e)))?;
    Ok(config)
}

/// Build one gallery manifest and write it to the assets directory
fn build_gallery(config: &Config, gallery: Gallery, aligner: &Aligner) -> Result<(), AppError> {
    let data_dir = config.data_dir(gallery);
    let root = config.root_path();
    let output = config.output_path(gallery);

    info!("Building {} manifest from {:?}", gallery.display_name(), data_dir);

    match gallery {
        Gallery::Recognition => {
            let manifest = build_recognition_manifest(&data_dir, &root, aligner)?;
            manifest::write_manifest(&manifest, &output)?;
            info!("Wrote {:?} with {} demos", output, manifest.demos.len());
        }
        Gallery::Editing => {
            let manifest = build_editing_manifest(&data_dir, &root)?;
            manifest::write_manifest(&manifest, &output)?;
            info!("Generated speech editing manifest with {} entries -> {:?}", manifest.example_count, output);
        }
        Gallery::Diarization => {
            let manifest = build_diarization_manifest(&data_dir, &root)?;
            manifest::write_manifest(&manifest, &output)?;
            info!("Wrote {:?} with {} demos", output, manifest.demos.len());
        }
    }

    Ok(())
}

/// Print aligned sentences for one transcript
fn run_align(words_path: &Path, srt_path: Option<&Path>, aligner: &Aligner) -> Result<(), AppError> {
    let mut diagnostics = Diagnostics::new();

    let data = load_word_data(&FileManager::read_to_string(words_path)?)?;
    let words = normalize_words_with_diagnostics(&data.words, &mut diagnostics);
    if words.is_empty() {
        return Err(AppError::File(format!("No usable words in {:?}", words_path)));
    }

    let segments = match srt_path {
        Some(path) => parse_segments_with_diagnostics(&FileManager::read_to_string(path)?, &mut diagnostics),
        None => Vec::new(),
    };
    let sentences = aligner.align(segments, &words, &mut diagnostics)?;

    if !diagnostics.is_clean() {
        warn!("{}", diagnostics);
    }

    let json = serde_json::to_string_pretty(&sentences).map_err(|e| AppError::Unknown(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Print the diff segments and flat texts of one edit transcript
fn run_diff(path: &Path) -> Result<()> {
    let content = FileManager::read_to_string(path)?;
    let document = parse_edit_markers(content.trim());

    info!("{} edited spans in {:?}", document.diff_count(), path);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
