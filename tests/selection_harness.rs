//! File selection and line source harness.
//!
//! # What this covers
//!
//! - **Latest selection**: the newest file is chosen by the timestamp in its
//!   name, even when mtime and lexical order disagree.
//! - **All selection**: every matching file, oldest first, concatenated.
//! - **No match**: an empty or unrelated directory is an error, not an empty
//!   result.
//! - **End to end**: selected lines run through the pipeline.
//!
//! # Running
//!
//! ```sh
//! cargo test --test selection_harness
//! ```

mod common;
use common::*;

use ginlog_core::config::{Config, Selection};
use ginlog_core::Pipeline;
use ginlog_feeds::{FeedError, FileSelector, LineSource};
use pretty_assertions::assert_eq;

fn rotated_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    // Written newest first so mtime order is the reverse of name order.
    write_log(dir.path(), &rotated_name(2, "Jan", 24, 0, 5), &[CORPUS_GIN[2], CORPUS_GIN[3]]);
    write_log(dir.path(), &rotated_name(31, "Dec", 23, 23, 55), &[CORPUS_GIN[1]]);
    write_log(dir.path(), &rotated_name(10, "May", 23, 14, 22), &[CORPUS_GIN[0]]);
    write_log(dir.path(), "server.log", &[CORPUS_NOISE[0]]);
    dir
}

#[test]
fn latest_file_by_name_timestamp() {
    let dir = rotated_dir();
    let files = FileSelector::default()
        .select(dir.path(), Selection::Latest)
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(
        files[0].path.file_name().unwrap().to_string_lossy(),
        "gin 02 Jan 24 00:05 UTC.log"
    );
}

#[test]
fn all_files_concatenate_oldest_first() {
    let dir = rotated_dir();
    let files = FileSelector::default()
        .select(dir.path(), Selection::All)
        .unwrap();
    let lines = LineSource::new(files.into_iter().map(|f| f.path))
        .read_all()
        .unwrap();

    let mut out = Vec::new();
    Pipeline::default().run(&lines, &mut out).unwrap();
    assert_lines_eq!(String::from_utf8(out).unwrap(), CORPUS_GIN_RENDERED);
}

#[test]
fn latest_file_end_to_end() {
    let dir = rotated_dir();
    let files = FileSelector::default()
        .select(dir.path(), Selection::Latest)
        .unwrap();
    let lines = LineSource::new(files.into_iter().map(|f| f.path))
        .read_all()
        .unwrap();

    let mut out = Vec::new();
    Pipeline::default().run(&lines, &mut out).unwrap();
    assert_lines_eq!(String::from_utf8(out).unwrap(), &CORPUS_GIN_RENDERED[2..]);
}

#[test]
fn empty_directory_has_no_matching_file() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), "access.log", CORPUS_GIN);

    let err = FileSelector::default()
        .select(dir.path(), Selection::Latest)
        .unwrap_err();
    assert!(matches!(err, FeedError::NoMatchingFile { .. }), "{err:?}");
    assert!(err.to_string().contains("gin*.log"), "{err}");
}

#[test]
fn configured_pattern_and_name_format() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), "api 2024-03-01T10-30.log", &[CORPUS_GIN[0]]);
    write_log(dir.path(), "api 2024-03-02T09-15.log", &[CORPUS_GIN[1]]);

    let mut config = Config::defaults();
    config.files.pattern = "api*.log".to_string();
    config.files.name_timestamp_format = "%Y-%m-%dT%H-%M.log".to_string();

    let files = FileSelector::new(&config.files)
        .select(dir.path(), Selection::Latest)
        .unwrap();
    assert!(files[0].path.ends_with("api 2024-03-02T09-15.log"));
}
