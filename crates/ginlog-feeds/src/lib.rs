//! ginlog-feeds — where the raw lines come from.
//!
//! [`file::FileSelector`] finds rotated Gin log files in a directory and
//! picks the ones to read; [`lines::LineSource`] reads them in order and
//! hands plain lines to [`ginlog_core::Pipeline`].

pub mod error;
pub mod file;
pub mod lines;

pub use error::FeedError;
pub use file::{FileSelector, RotatedFile};
pub use lines::LineSource;
