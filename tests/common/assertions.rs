//! Assertions on rendered access-log lines.

#![allow(dead_code)]

/// Assert that `line` has the access-log shape
/// `<addr> - - [<DD>/<Mon>/<YYYY>:<HH>:<MM>:<SS> +0000] "<METHOD> <ROUTE>" <status> -`.
pub fn assert_access_log_shape(line: &str) {
    let (addr, rest) = line.split_once(" - - [").unwrap_or_else(|| fail(line, "ident/user"));
    if addr.is_empty() || addr.contains(' ') {
        fail(line, "client address");
    }

    let (time, rest) = rest.split_once("] \"").unwrap_or_else(|| fail(line, "timestamp bracket"));
    if chrono::DateTime::parse_from_str(time, "%d/%b/%Y:%H:%M:%S %z").is_err() {
        fail(line, "timestamp");
    }
    if !time.ends_with(" +0000") {
        fail(line, "offset");
    }

    let (request, rest) = rest.split_once("\" ").unwrap_or_else(|| fail(line, "request quotes"));
    if request.split(' ').count() != 2 {
        fail(line, "request");
    }

    let status = rest.strip_suffix(" -").unwrap_or_else(|| fail(line, "byte count"));
    if status.parse::<u16>().is_err() {
        fail(line, "status");
    }
}

fn fail(line: &str, why: &str) -> ! {
    panic!("not an access-log line ({why}): {line:?}")
}

/// Assert that two line sequences are equal, with a readable diff.
#[macro_export]
macro_rules! assert_lines_eq {
    ($actual:expr, $expected:expr) => {{
        let actual_text: &str = &$actual;
        let actual: Vec<&str> = actual_text.lines().collect();
        let expected: Vec<&str> = $expected.iter().copied().collect();
        pretty_assertions::assert_eq!(actual, expected);
    }};
}
