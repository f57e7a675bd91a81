//! Five-field cron schedules: construction, field mutation, and matching.

use std::str::FromStr;

use tracing::debug;

use crate::clock::{Clock, SystemClock, TimeParts};
use crate::error::CronError;
use crate::expression::FieldExpression;
use crate::field;


/// Timezone assumed when none is given.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A parsed five-field cron schedule bound to a timezone.
///
/// Construction is all-or-nothing: every field must validate or no `Cron`
/// value exists. Matching an instant is a pure AND over the five fields;
/// the timezone only tells the clock collaborator where to project "now".
#[derive(Debug, Clone, PartialEq)]
pub struct Cron {
    timezone: String,
    minute: FieldExpression,
    hour: FieldExpression,
    day_of_month: FieldExpression,
    month: FieldExpression,
    day_of_week: FieldExpression,
}

impl Cron {
    /// Parse a five-field cron expression bound to `timezone`.
    ///
    /// Fields are ordered minute, hour, day-of-month, month, day-of-week
    /// and are separated by single spaces. The first invalid field aborts
    /// construction.
    pub fn parse(expression: &str, timezone: impl Into<String>) -> Result<Self, CronError> {
        let expression = expression.trim();

        let segments: Vec<&str> = expression.split(' ').collect();
        if segments.len() != 5 || segments.iter().any(|s| s.is_empty()) {
            return Err(CronError::InvalidExpression(expression.to_string()));
        }

        let cron = Self {
            timezone: timezone.into(),
            minute: FieldExpression::parse(segments[0], &field::MINUTE)?,
            hour: FieldExpression::parse(segments[1], &field::HOUR)?,
            day_of_month: FieldExpression::parse(segments[2], &field::DAY_OF_MONTH)?,
            month: FieldExpression::parse(segments[3], &field::MONTH)?,
            day_of_week: FieldExpression::parse(segments[4], &field::DAY_OF_WEEK)?,
        };
        debug!(expression = %expression, timezone = %cron.timezone, "compiled cron schedule");
        Ok(cron)
    }

    /// A schedule that matches every minute of every day.
    pub fn always(timezone: impl Into<String>) -> Result<Self, CronError> {
        Self::parse("* * * * *", timezone)
    }

    // ── Field mutators ──────────────────────────────────────────────
    //
    // Each mutator re-parses the given text and swaps the field in on
    // success; on failure the schedule keeps its previous value. All return
    // `&mut Self` so updates can be chained with `?`.

    /// Replace the minute field.
    pub fn set_minute(&mut self, expression: &str) -> Result<&mut Self, CronError> {
        self.minute = FieldExpression::parse(expression, &field::MINUTE)?;
        Ok(self)
    }

    /// Replace the hour field.
    pub fn set_hour(&mut self, expression: &str) -> Result<&mut Self, CronError> {
        self.hour = FieldExpression::parse(expression, &field::HOUR)?;
        Ok(self)
    }

    /// Replace the day-of-month field.
    pub fn set_day_of_month(&mut self, expression: &str) -> Result<&mut Self, CronError> {
        self.day_of_month = FieldExpression::parse(expression, &field::DAY_OF_MONTH)?;
        Ok(self)
    }

    /// Replace the month field.
    pub fn set_month(&mut self, expression: &str) -> Result<&mut Self, CronError> {
        self.month = FieldExpression::parse(expression, &field::MONTH)?;
        Ok(self)
    }

    /// Replace the day-of-week field.
    pub fn set_day_of_week(&mut self, expression: &str) -> Result<&mut Self, CronError> {
        self.day_of_week = FieldExpression::parse(expression, &field::DAY_OF_WEEK)?;
        Ok(self)
    }

    /// Replace the timezone. The zone name is free-form here; the clock
    /// collaborator resolves it when the schedule is checked.
    pub fn set_timezone(&mut self, timezone: impl Into<String>) -> &mut Self {
        self.timezone = timezone.into();
        self
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn minute(&self) -> &FieldExpression {
        &self.minute
    }

    pub fn hour(&self) -> &FieldExpression {
        &self.hour
    }

    pub fn day_of_month(&self) -> &FieldExpression {
        &self.day_of_month
    }

    pub fn month(&self) -> &FieldExpression {
        &self.month
    }

    pub fn day_of_week(&self) -> &FieldExpression {
        &self.day_of_week
    }

    // ── Matching ────────────────────────────────────────────────────

    /// True if `at` satisfies all five fields.
    pub fn matches(&self, at: TimeParts) -> bool {
        self.minute.matches(at.minute)
            && self.hour.matches(at.hour)
            && self.day_of_month.matches(at.day_of_month)
            && self.month.matches(at.month)
            && self.day_of_week.matches(at.day_of_week)
    }

    /// True if the current instant in the configured timezone matches.
    pub fn is_valid(&self) -> Result<bool, CronError> {
        self.is_valid_with(&SystemClock)
    }

    /// [`Cron::is_valid`] against an explicit clock.
    pub fn is_valid_with(&self, clock: &impl Clock) -> Result<bool, CronError> {
        Ok(self.matches(clock.now_in(&self.timezone)?))
    }
}

impl FromStr for Cron {
    type Err = CronError;

    /// Parse with the default UTC timezone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_TIMEZONE)
    }
}
