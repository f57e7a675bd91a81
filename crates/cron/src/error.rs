//! Cron error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CronError {
    /// A single field of the expression failed grammar validation.
    #[error("invalid cron expression {expression:?} for {segment} field")]
    InvalidField {
        expression: String,
        segment: &'static str,
    },

    /// The expression does not split into exactly five fields.
    #[error("invalid cron expression {0:?}: expected 5 space-separated fields")]
    InvalidExpression(String),

    /// The configured timezone is not a known zone name.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}
