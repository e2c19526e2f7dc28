//! Naive prime sieve and the timing loop around it.
//!
//! [`NaiveSieve`] is deliberately quadratic: every surviving candidate scans
//! the whole remainder of the table with a modulo test instead of stepping by
//! multiples. It exists to be timed, not to be fast.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Lazily yields the primes below `limit`.
#[derive(Debug, Clone)]
pub struct NaiveSieve {
    candidates: Vec<bool>,
    next: usize,
}

impl NaiveSieve {
    pub fn new(limit: usize) -> Self {
        Self {
            candidates: vec![true; limit],
            next: 2,
        }
    }

    pub fn limit(&self) -> usize {
        self.candidates.len()
    }
}

impl Iterator for NaiveSieve {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.candidates.len() {
            let i = self.next;
            self.next += 1;
            if !self.candidates[i] {
                continue;
            }
            for j in i + 1..self.candidates.len() {
                if j % i == 0 {
                    self.candidates[j] = false;
                }
            }
            return Some(i);
        }
        None
    }
}

/// One row of the timing table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub limit: usize,
    pub elapsed: Duration,
}

impl std::fmt::Display for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.limit, self.elapsed.as_secs_f64())
    }
}

/// Time one full run of the sieve up to `limit`.
pub fn time_sieve(limit: usize) -> Timing {
    let start = Instant::now();
    black_box(NaiveSieve::new(limit).count());
    Timing {
        limit,
        elapsed: start.elapsed(),
    }
}

/// Timings for every limit in `start..stop`, `step` apart. Runs lazily, one
/// sieve per item.
pub fn timings(start: usize, stop: usize, step: usize) -> impl Iterator<Item = Timing> {
    (start..stop).step_by(step.max(1)).map(time_sieve)
}
