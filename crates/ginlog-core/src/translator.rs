//! Translator — turns one raw Gin request line into a [`ParsedLogEntry`] and
//! renders it as a common access-log line.
//!
//! Source shape (Gin's default logger, colours optional):
//!
//! ```text
//! [GIN] 2023/05/10 - 14:22:01 | 200 |     123.45µs |       127.0.0.1 | GET      "/health"
//! ```
//!
//! Rendered shape:
//!
//! ```text
//! 127.0.0.1 - - [10/May/2023:14:22:01 +0000] "GET /health" 200 -
//! ```

use crate::config::SourceConfig;
use crate::error::{MalformedLine, TranslateError};
use crate::types::{Latency, LatencyUnit, ParsedLogEntry};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Characters that must follow the marker for a line to be considered.
const MIN_BODY_CHARS: usize = 5;

const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

fn ansi_escape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape regex must compile"))
}

/// Parses and renders lines for one source configuration.
#[derive(Debug, Clone)]
pub struct Translator {
    marker: String,
    timestamp_format: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(&SourceConfig::default())
    }
}

/// The five `|`-separated columns of a request line, trimmed.
struct Columns<'a> {
    timestamp: &'a str,
    status: &'a str,
    latency: &'a str,
    client_address: &'a str,
    request: &'a str,
}

impl<'a> Columns<'a> {
    fn split(line: &'a str) -> Result<Self, MalformedLine> {
        let fields: Vec<&str> = line.splitn(5, '|').map(str::trim).collect();
        match fields.as_slice() {
            &[.., request] if pipe_outside_quotes(request) => Err(MalformedLine::FieldCount {
                found: fields.len() + request.matches('|').count(),
            }),
            &[timestamp, status, latency, client_address, request] => Ok(Self {
                timestamp,
                status,
                latency,
                client_address,
                request,
            }),
            other => Err(MalformedLine::FieldCount { found: other.len() }),
        }
    }
}

/// A `|` in the request column is only legitimate inside Gin's quoted path.
fn pipe_outside_quotes(request: &str) -> bool {
    let mut quoted = false;
    for c in request.chars() {
        match c {
            '"' => quoted = !quoted,
            '|' if !quoted => return true,
            _ => {}
        }
    }
    false
}

impl Translator {
    pub fn new(source: &SourceConfig) -> Self {
        Self {
            marker: source.marker.clone(),
            timestamp_format: source.timestamp_format.clone(),
        }
    }

    /// Parse one raw line.
    ///
    /// Returns `Ok(None)` for lines that are not request lines (no marker,
    /// or fewer than five characters after it). Those are filtered, not
    /// errors. The marker is matched on the raw text; colour escapes are
    /// only stripped from what follows it.
    pub fn parse(&self, raw: &str) -> Result<Option<ParsedLogEntry>, TranslateError> {
        let raw = raw.trim_end();
        match raw.strip_prefix(self.marker.as_str()) {
            Some(body) if body.chars().count() >= MIN_BODY_CHARS => {}
            _ => return Ok(None),
        }

        let cleaned = ansi_escape().replace_all(raw, "");
        let line: &str = &cleaned;

        let columns = Columns::split(line)?;

        let timestamp = NaiveDateTime::parse_from_str(columns.timestamp, &self.timestamp_format)
            .map_err(|source| MalformedLine::Timestamp {
                value: columns.timestamp.to_string(),
                source,
            })?
            .and_utc();

        let status = columns
            .status
            .parse::<u16>()
            .map_err(|source| MalformedLine::Status {
                value: columns.status.to_string(),
                source,
            })?;

        let latency = parse_latency(columns.latency)?;

        let mut tokens = columns.request.split_whitespace();
        let (method, route) = match (tokens.next(), tokens.next()) {
            (Some(method), Some(route)) => (method, unquote(route)),
            _ => {
                return Err(MalformedLine::RequestLine {
                    value: columns.request.to_string(),
                }
                .into())
            }
        };

        Ok(Some(ParsedLogEntry::new(
            timestamp,
            status,
            latency,
            columns.client_address.to_string(),
            method.to_string(),
            route.to_string(),
        )))
    }

    /// Parse and render in one step. `Ok(None)` means the line was filtered.
    pub fn translate(&self, raw: &str) -> Result<Option<String>, TranslateError> {
        Ok(self.parse(raw)?.map(|entry| render(&entry)))
    }
}

/// Parse a latency column such as `123.45µs` or `2.5ms`.
///
/// The unit is the last two characters. An unknown unit is fatal; a known
/// unit with a bad number is only malformed.
pub fn parse_latency(text: &str) -> Result<Latency, TranslateError> {
    let unrecognized = || TranslateError::UnrecognizedLatencyUnit {
        value: text.to_string(),
    };

    let split_at = text
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .ok_or_else(unrecognized)?;
    let (number, suffix) = text.split_at(split_at);
    let unit = LatencyUnit::from_suffix(suffix).ok_or_else(unrecognized)?;

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Latency::new(value, unit)),
        _ => Err(MalformedLine::LatencyValue {
            value: text.to_string(),
        }
        .into()),
    }
}

/// Gin prints the path with `%#v`, so it usually arrives quoted.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Access-log view of an entry; `Display` writes the rendered line without
/// a trailing newline.
pub struct AccessLog<'a>(pub &'a ParsedLogEntry);

impl fmt::Display for AccessLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        write!(
            f,
            "{} - - [{}] \"{} {}\" {} -",
            entry.client_address(),
            entry.timestamp().format(ACCESS_LOG_TIME_FORMAT),
            entry.method(),
            entry.route(),
            entry.status(),
        )
    }
}

/// Render an entry as a common access-log line.
pub fn render(entry: &ParsedLogEntry) -> String {
    AccessLog(entry).to_string()
}

/// [`Translator::parse`] with the default `[GIN]` source configuration.
pub fn parse(raw: &str) -> Result<Option<ParsedLogEntry>, TranslateError> {
    Translator::default().parse(raw)
}

/// [`Translator::translate`] with the default `[GIN]` source configuration.
pub fn translate(raw: &str) -> Result<Option<String>, TranslateError> {
    Translator::default().translate(raw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
