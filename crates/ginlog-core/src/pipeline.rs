//! Pipeline — drives the [`Translator`] over a batch of lines.
//!
//! Policy, applied uniformly:
//!
//! - lines without the marker are filtered silently;
//! - malformed lines are skipped with a warning and counted;
//! - an unrecognized latency unit stops the run; nothing after the offending
//!   line is written.

use crate::error::PipelineError;
use crate::translator::{AccessLog, Translator};
use std::io::Write;

/// Line counts of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub read: usize,
    pub rendered: usize,
    pub filtered: usize,
    pub skipped: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines read, {} rendered, {} filtered, {} skipped",
            self.read, self.rendered, self.filtered, self.skipped
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    translator: Translator,
}

impl Pipeline {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Translate `lines` in order, writing one rendered line per request
    /// line to `out`.
    ///
    /// `out` is flushed before returning, including when a fatal error ends
    /// the run early.
    pub fn run<I, S, W>(&self, lines: I, out: &mut W) -> Result<Summary, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = Summary::default();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            summary.read += 1;

            match self.translator.parse(raw.as_ref()) {
                Ok(Some(entry)) => {
                    writeln!(out, "{}", AccessLog(&entry))?;
                    summary.rendered += 1;
                }
                Ok(None) => summary.filtered += 1,
                Err(err) if err.is_fatal() => {
                    tracing::error!(line = line_no, error = %err, "aborting");
                    out.flush()?;
                    return Err(PipelineError::Fatal {
                        line: line_no,
                        source: err,
                    });
                }
                Err(err) => {
                    tracing::warn!(line = line_no, error = %err, "skipping malformed line");
                    summary.skipped += 1;
                }
            }
        }

        out.flush()?;
        tracing::debug!(%summary, "batch complete");
        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
