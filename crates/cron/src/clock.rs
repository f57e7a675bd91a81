//! Wall-clock retrieval projected into a named timezone.
//!
//! The schedule core only consumes [`TimeParts`]; [`Clock`] is the seam that
//! keeps matching testable without touching the system clock.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::CronError;

/// An instant reduced to the five cron-relevant integers, already projected
/// into the schedule's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    /// 0-59.
    pub minute: u8,
    /// 0-23.
    pub hour: u8,
    /// 1-31.
    pub day_of_month: u8,
    /// 1-12.
    pub month: u8,
    /// 0-6, Sunday is 0.
    pub day_of_week: u8,
}

impl TimeParts {
    /// Project a zoned datetime into its cron-relevant parts.
    pub fn from_datetime<Z: TimeZone>(datetime: &DateTime<Z>) -> Self {
        Self {
            minute: datetime.minute() as u8,
            hour: datetime.hour() as u8,
            day_of_month: datetime.day() as u8,
            month: datetime.month() as u8,
            day_of_week: datetime.weekday().num_days_from_sunday() as u8,
        }
    }
}

/// Source of "now" for schedule matching.
pub trait Clock {
    /// The current instant projected into `timezone`.
    fn now_in(&self, timezone: &str) -> Result<TimeParts, CronError>;
}

/// System clock backed by `chrono` and the IANA zone database.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_in(&self, timezone: &str) -> Result<TimeParts, CronError> {
        let zone: Tz = timezone.parse().map_err(|_| {
            warn!(timezone = %timezone, "unknown timezone");
            CronError::UnknownTimezone(timezone.to_string())
        })?;
        Ok(TimeParts::from_datetime(&Utc::now().with_timezone(&zone)))
    }
}
