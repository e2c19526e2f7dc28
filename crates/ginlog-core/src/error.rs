use thiserror::Error;

/// Why a single `[GIN]` line could not be translated.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The latency column ends in a unit other than `µs` or `ms`. Processing
    /// of the whole batch stops here.
    #[error("unrecognized latency unit in {value:?}")]
    UnrecognizedLatencyUnit { value: String },

    /// The line is broken in a way that only affects itself.
    #[error(transparent)]
    Malformed(#[from] MalformedLine),
}

impl TranslateError {
    /// Whether the error must abort the run rather than skip the line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TranslateError::UnrecognizedLatencyUnit { .. })
    }
}

/// Per-line parse failures. These are skipped by the
/// [`Pipeline`](crate::pipeline::Pipeline), never fatal.
#[derive(Debug, Error)]
pub enum MalformedLine {
    #[error("expected 5 '|'-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid status {value:?}: {source}")]
    Status {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid latency value {value:?}")]
    LatencyValue { value: String },

    #[error("expected \"METHOD ROUTE\", found {value:?}")]
    RequestLine { value: String },
}

/// Failure of a whole batch run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("aborted at line {line}")]
    Fatal {
        line: usize,
        #[source]
        source: TranslateError,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
