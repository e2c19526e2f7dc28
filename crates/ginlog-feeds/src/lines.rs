//! Line source — reads selected files whole, in order.

use crate::error::FeedError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LineSource {
    files: Vec<PathBuf>,
}

impl LineSource {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// All lines of every file, concatenated in file order.
    pub fn read_all(&self) -> Result<Vec<String>, FeedError> {
        let mut lines = Vec::new();
        for path in &self.files {
            let file_lines = read_lines(path)?;
            tracing::debug!(file = %path.display(), lines = file_lines.len(), "read log file");
            lines.extend(file_lines);
        }
        Ok(lines)
    }
}

/// Read one file into lines without terminators. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FeedError> {
    let bytes = std::fs::read(path).map_err(|e| FeedError::read_file(path, e))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}
