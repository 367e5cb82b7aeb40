//! Time source for everything that needs "now" or "today".
//!
//! Services receive a `SharedClock` instead of reading the wall clock so that
//! tests can pin time to a known instant.

use chrono::{DateTime, FixedOffset, Local};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    /// Current instant expressed in server-local time
    fn now(&self) -> DateTime<FixedOffset>;
}

pub type SharedClock = Arc<dyn Clock>;

/// Reads the host clock and local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    #[cfg(test)]
    pub fn at(rfc3339: &str) -> Self {
        match DateTime::parse_from_rfc3339(rfc3339) {
            Ok(instant) => Self::new(instant),
            Err(e) => panic!("invalid fixed clock timestamp {}: {}", rfc3339, e),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
