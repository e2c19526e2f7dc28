//! Rotated log file discovery.
//!
//! Gin log files are rotated into names that carry their generation time,
//! e.g. `gin 10 May 23 14:22 UTC.log`. The timestamp in the name, not the
//! file's mtime or lexical order, decides which file is the most recent.

use crate::error::FeedError;
use chrono::{DateTime, NaiveDateTime, Utc};
use ginlog_core::config::{FilesConfig, Selection};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// A matching log file and the generation time parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatedFile {
    pub path: PathBuf,
    pub generated: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileSelector {
    pattern: String,
    name_timestamp_format: String,
}

impl Default for FileSelector {
    fn default() -> Self {
        Self::new(&FilesConfig::default())
    }
}

impl FileSelector {
    pub fn new(files: &FilesConfig) -> Self {
        Self {
            pattern: files.pattern.clone(),
            name_timestamp_format: files.name_timestamp_format.clone(),
        }
    }

    /// Every file in `dir` matching the pattern whose name carries a
    /// timestamp, oldest first. Files without a parsable name are skipped.
    pub fn discover(&self, dir: &Path) -> Result<Vec<RotatedFile>, FeedError> {
        if !dir.is_dir() {
            return Err(FeedError::NotADirectory {
                dir: dir.to_path_buf(),
            });
        }

        let pattern = resolve_glob(dir, &self.pattern);
        let mut files: Vec<RotatedFile> = glob(&pattern)
            .map_err(|e| FeedError::Glob {
                pattern: pattern.clone(),
                source: e,
            })?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                match self.name_timestamp(&name) {
                    Some(generated) => Some(RotatedFile { path, generated }),
                    None => {
                        tracing::debug!(file = %path.display(), "no timestamp in file name, skipping");
                        None
                    }
                }
            })
            .collect();

        files.sort_by(|a, b| a.generated.cmp(&b.generated).then_with(|| a.path.cmp(&b.path)));
        Ok(files)
    }

    /// Choose the files to read according to `selection`.
    ///
    /// Returns [`FeedError::NoMatchingFile`] rather than an empty list.
    pub fn select(&self, dir: &Path, selection: Selection) -> Result<Vec<RotatedFile>, FeedError> {
        let mut files = self.discover(dir)?;
        if files.is_empty() {
            return Err(FeedError::NoMatchingFile {
                dir: dir.to_path_buf(),
                pattern: self.pattern.clone(),
            });
        }

        if selection == Selection::Latest {
            files.drain(..files.len() - 1);
        }
        Ok(files)
    }

    /// Parse the generation time out of a file name: everything after the
    /// first whitespace-separated word, read as UTC.
    pub fn name_timestamp(&self, file_name: &str) -> Option<DateTime<Utc>> {
        let rest = file_name.split_whitespace().skip(1).collect::<Vec<_>>().join(" ");
        NaiveDateTime::parse_from_str(&rest, &self.name_timestamp_format)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Join a glob pattern onto `root`, escaping any metacharacters in `root`
/// itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
