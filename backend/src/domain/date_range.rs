//! Turns `?date=YYYY-MM-DD&type=...` style parameters into a storage filter.
//!
//! A day is the closed interval `[00:00:00.000, 23:59:59.999]` in the clock's
//! local offset. Malformed dates are reported as `InvalidDate`; they never fall
//! back to today.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::domain::clock::SharedClock;
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::models::transaction::TransactionKind;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[cfg(test)]
impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// What the repository should match; `None` fields do not narrow the result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub date_range: Option<DateRange>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }
}

#[derive(Clone)]
pub struct DateRangeResolver {
    clock: SharedClock,
}

impl DateRangeResolver {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock }
    }

    /// Range covering the current calendar day
    pub fn today(&self) -> DateRange {
        let now = self.clock.now();
        day_range(now.date_naive(), *now.offset())
    }

    /// Range covering `date`, or today when `date` is absent
    pub fn resolve_day(&self, date: Option<&str>) -> LedgerResult<DateRange> {
        match date {
            None => Ok(self.today()),
            Some(raw) => {
                let day = parse_day(raw)?;
                Ok(day_range(day, *self.clock.now().offset()))
            }
        }
    }

    /// Full filter for the date listing: the day plus an optional kind.
    /// Unrecognized kind strings are ignored.
    pub fn resolve(&self, date: Option<&str>, kind: Option<&str>) -> LedgerResult<TransactionFilter> {
        let date_range = self.resolve_day(date)?;
        let kind = kind.and_then(TransactionKind::parse);
        debug!("Resolved date filter {:?} with kind {:?}", date_range, kind);
        Ok(TransactionFilter {
            date_range: Some(date_range),
            kind,
        })
    }
}

fn parse_day(raw: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

fn day_range(day: NaiveDate, offset: FixedOffset) -> DateRange {
    let start_local = day.and_time(NaiveTime::MIN);
    let end_local = start_local + Duration::days(1) - Duration::milliseconds(1);
    DateRange {
        start: to_utc(offset, start_local),
        end: to_utc(offset, end_local),
    }
}

fn to_utc(offset: FixedOffset, local: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(local - offset))
}
