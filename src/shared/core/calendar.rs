// Calendar days and the reference clock.
//
// Purpose
// - Turn raw inputs (plain dates, offset timestamps, UTC instants) into calendar days of a
//   single tracking offset.
// - Provide the Clock port so "today" is read once at the edge and passed inward.
//
// Boundaries
// - Inputs without an explicit offset are rejected. No timezone guessing.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at noon UTC of the given day.
    pub fn at_noon(day: NaiveDate) -> Self {
        Self(day.and_time(NaiveTime::MIN).and_utc() + TimeDelta::hours(12))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingCalendar {
    offset: FixedOffset,
}

impl Default for TrackingCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl TrackingCalendar {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn from_offset_minutes(minutes: i32) -> Result<Self, CalendarError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| {
                CalendarError::InvalidInput(format!("utc offset out of range: {minutes} minutes"))
            })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.day_of(clock.now())
    }

    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp carrying its own offset.
    pub fn parse_day(&self, raw: &str) -> Result<NaiveDate, CalendarError> {
        let raw = raw.trim();
        if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(day);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|instant| instant.with_timezone(&self.offset).date_naive())
            .map_err(|_| CalendarError::InvalidInput(format!("not a calendar day: {raw:?}")))
    }

    /// Every day of the given month, in order.
    pub fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>, CalendarError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CalendarError::InvalidInput(format!("no such month: {year}-{month}")))?;
        Ok(first
            .iter_days()
            .take_while(|day| day.month() == first.month())
            .collect())
    }
}
