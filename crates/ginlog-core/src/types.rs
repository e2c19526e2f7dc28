//! Core types for ginlog-core.
//!
//! This module defines the parsed form of one Gin request log line, the
//! [`ParsedLogEntry`], together with its [`Latency`] and [`LatencyUnit`].

use chrono::{DateTime, Utc};
use std::time::Duration;

/// One Gin request log line, parsed into typed fields.
///
/// Entries are only ever produced whole by
/// [`translator::parse`](crate::translator::parse); the fields are private so
/// an entry cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLogEntry {
    timestamp: DateTime<Utc>,
    status: u16,
    latency: Latency,
    client_address: String,
    method: String,
    route: String,
}

impl ParsedLogEntry {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        status: u16,
        latency: Latency,
        client_address: String,
        method: String,
        route: String,
    ) -> Self {
        Self {
            timestamp,
            status,
            latency,
            client_address,
            method,
            route,
        }
    }

    /// Request time. Gin writes local wall-clock time without an offset; it
    /// is taken to be UTC.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Parsed but never rendered.
    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Client IP or host, as Gin reported it.
    pub fn client_address(&self) -> &str {
        &self.client_address
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

/// Unit suffix of a Gin latency column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyUnit {
    Microseconds,
    Milliseconds,
}

impl LatencyUnit {
    /// Recognise a two-character suffix. Both the micro sign (U+00B5) and
    /// the Greek small mu (U+03BC) spell microseconds.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "µs" | "μs" => Some(LatencyUnit::Microseconds),
            "ms" => Some(LatencyUnit::Milliseconds),
            _ => None,
        }
    }

    /// Reference scaling applied by [`Latency::derived_value`]. The same
    /// factor is used for both units; see that method.
    pub const fn derived_factor(self) -> f64 {
        match self {
            LatencyUnit::Microseconds => 1_000.0,
            LatencyUnit::Milliseconds => 1_000.0,
        }
    }

    /// Nanoseconds in one of this unit.
    pub const fn nanos(self) -> f64 {
        match self {
            LatencyUnit::Microseconds => 1_000.0,
            LatencyUnit::Milliseconds => 1_000_000.0,
        }
    }
}

impl std::fmt::Display for LatencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatencyUnit::Microseconds => write!(f, "µs"),
            LatencyUnit::Milliseconds => write!(f, "ms"),
        }
    }
}

/// A latency column value: the numeric prefix and its unit, as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    value: f64,
    unit: LatencyUnit,
}

impl Latency {
    pub fn new(value: f64, unit: LatencyUnit) -> Self {
        Self { value, unit }
    }

    /// The number in front of the unit suffix.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LatencyUnit {
        self.unit
    }

    /// Single-unit value using the legacy scaling: the prefix times 1000 for
    /// microseconds *and* milliseconds.
    ///
    /// The two paths do not land on the same real unit (`2.5ms` derives
    /// `2500`, `2500µs` derives `2_500_000`). The factor is kept as-is until
    /// the intended scale is confirmed; use [`Latency::duration`] for a
    /// correctly scaled value.
    pub fn derived_value(&self) -> f64 {
        self.value * self.unit.derived_factor()
    }

    /// Real elapsed time, scaled per unit.
    pub fn duration(&self) -> Duration {
        Duration::from_nanos((self.value * self.unit.nanos()).round() as u64)
    }
}

impl std::fmt::Display for Latency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
