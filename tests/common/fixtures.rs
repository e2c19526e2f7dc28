//! Static log corpora and directory fixtures used across harnesses.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Request lines as Gin's default logger writes them to a file (no colours).
pub const CORPUS_GIN: &[&str] = &[
    "[GIN] 2023/05/10 - 14:22:01 | 200 |     123.45µs |       127.0.0.1 | GET      \"/health\"",
    "[GIN] 2023/05/10 - 14:22:03 | 304 |      1.0023ms |    203.0.113.7 | GET      \"/css/site.css\"",
    "[GIN] 2023/05/10 - 14:23:17 | 404 |       48.9µs |  2001:db8::1f3 | GET      \"/wp-login.php\"",
    "[GIN] 2023/05/10 - 14:25:00 | 500 |     12.004ms |   198.51.100.2 | POST     \"/dnschecker\"",
];

/// What [`CORPUS_GIN`] renders to, in order.
pub const CORPUS_GIN_RENDERED: &[&str] = &[
    r#"127.0.0.1 - - [10/May/2023:14:22:01 +0000] "GET /health" 200 -"#,
    r#"203.0.113.7 - - [10/May/2023:14:22:03 +0000] "GET /css/site.css" 304 -"#,
    r#"2001:db8::1f3 - - [10/May/2023:14:23:17 +0000] "GET /wp-login.php" 404 -"#,
    r#"198.51.100.2 - - [10/May/2023:14:25:00 +0000] "POST /dnschecker" 500 -"#,
];

/// Lines that share a Gin log file with request lines but are not requests.
pub const CORPUS_NOISE: &[&str] = &[
    "[GIN-debug] [WARNING] Running in \"debug\" mode. Switch to \"release\" mode in production.",
    "[GIN-debug] GET    /                         --> main.main.func1 (4 handlers)",
    "[GIN-debug] Listening and serving HTTP on [::1]:8080",
    "2023/05/10 14:22:00 main.go:130: Running in the fly.io runtime.",
    "",
    "[GIN]",
];

/// Request lines that are broken but only affect themselves.
pub const CORPUS_MALFORMED: &[&str] = &[
    "[GIN] 2023/05/10 - 14:22:01 | 200 | 1.5ms | 127.0.0.1",
    "[GIN] 2023/13/40 - 14:22:01 | 200 | 1.5ms | 127.0.0.1 | GET \"/\"",
    "[GIN] 2023/05/10 - 14:22:01 | two hundred | 1.5ms | 127.0.0.1 | GET \"/\"",
    "[GIN] 2023/05/10 - 14:22:01 | 200 | quickms | 127.0.0.1 | GET \"/\"",
    "[GIN] 2023/05/10 - 14:22:01 | 200 | 1.5ms | 127.0.0.1 | GET",
];

/// A request line whose latency unit aborts the run.
pub const LINE_FATAL_LATENCY: &str =
    "[GIN] 2023/05/10 - 14:30:00 | 200 |       5.002s |       127.0.0.1 | GET      \"/slow\"";

/// Write `lines` to `dir/name`, newline terminated, and return the path.
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut body = lines.join("\n");
    body.push('\n');
    std::fs::write(&path, body).expect("write fixture log");
    path
}

/// File name of a rotated Gin log generated at the given UTC time.
pub fn rotated_name(day: u32, month: &str, year: u32, hour: u32, minute: u32) -> String {
    format!("gin {day:02} {month} {year:02} {hour:02}:{minute:02} UTC.log")
}
