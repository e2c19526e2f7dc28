//! Configuration types for ginlog.
//!
//! [`Config::load`] layers an optional TOML file over the built-in defaults.
//! [`Config::defaults`] returns the defaults without touching the filesystem
//! (useful in tests). Nothing is ever written back to disk.

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_MARKER: &str = "[GIN]";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[GIN] %Y/%m/%d - %H:%M:%S";
pub const DEFAULT_FILE_PATTERN: &str = "gin*.log";
pub const DEFAULT_NAME_TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M UTC.log";

const DEFAULT_CONFIG: &str = r#"
[source]
marker           = "[GIN]"
timestamp_format = "[GIN] %Y/%m/%d - %H:%M:%S"

[files]
pattern               = "gin*.log"
name_timestamp_format = "%d %b %y %H:%M UTC.log"
selection             = "latest"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

/// `[source]` section: the shape of the lines being translated.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Literal prefix that identifies a request line.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// `chrono` format of the first `|`-separated field, marker included.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_marker() -> String { DEFAULT_MARKER.to_string() }
fn default_timestamp_format() -> String { DEFAULT_TIMESTAMP_FORMAT.to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// `[files]` section: how rotated log files are found and chosen.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Glob matched against file names inside the log directory.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// `chrono` format of the file name after its first space-separated word.
    #[serde(default = "default_name_timestamp_format")]
    pub name_timestamp_format: String,
    #[serde(default)]
    pub selection: Selection,
}

fn default_pattern() -> String { DEFAULT_FILE_PATTERN.to_string() }
fn default_name_timestamp_format() -> String { DEFAULT_NAME_TIMESTAMP_FORMAT.to_string() }

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            name_timestamp_format: default_name_timestamp_format(),
            selection: Selection::default(),
        }
    }
}

/// Which of the matching files are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Only the file with the newest name timestamp.
    #[default]
    Latest,
    /// Every matching file, oldest first.
    All,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Build the configuration, layering `path` (if given) over the
    /// built-in defaults. A given path must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
