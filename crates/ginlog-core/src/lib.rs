//! ginlog-core — parsing and rendering for ginlog.
//!
//! Everything in this crate is free of I/O except the [`pipeline`], which
//! writes to any [`std::io::Write`] it is handed.
//!
//! # Flow
//!
//! ```text
//! raw line ──► Translator::parse ──► ParsedLogEntry ──► AccessLog (render)
//!                    │
//!                    └──► TranslateError (malformed: skip, latency unit: abort)
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod translator;
pub mod types;

pub use error::{MalformedLine, PipelineError, TranslateError};
pub use pipeline::{Pipeline, Summary};
pub use translator::{render, translate, Translator};
pub use types::{Latency, LatencyUnit, ParsedLogEntry};
