//! ginlog — Gin request log translation, plus the naive prime sieve that
//! the `prime-timings` harness measures.
//!
//! # Layout
//!
//! ```text
//! ginlog-feeds (FileSelector ──► LineSource) ──► ginlog-core (Pipeline ──► Translator) ──► stdout
//! ```
//!
//! The translator and file selection live in the `ginlog-core` and
//! `ginlog-feeds` workspace crates; this crate only carries the sieve.

pub mod sieve;
