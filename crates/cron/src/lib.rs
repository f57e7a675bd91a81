//! Cron expression parsing and instant matching.
//!
//! This crate provides:
//! - A per-field grammar parser (wildcards, ranges, steps, comma lists,
//!   named aliases) resolving each field to a bounded set of values
//! - Five field domains (minute, hour, day-of-month, month, day-of-week)
//!   with month/weekday alias tables and the weekday 0/7 Sunday rule
//! - [`Cron`]: five validated fields plus a timezone, matched against an
//!   instant with a pure five-way AND
//! - A [`Clock`] seam so matching stays testable without wall-clock time
//! - [`ScheduleConfig`]: serde-friendly schedule blocks for config files
//!
//! The crate answers "does this instant satisfy this expression"; it does
//! not compute the next firing time and does not run anything.

pub mod clock;
pub mod config;
pub mod error;
pub mod expression;
pub mod field;
mod parser;
pub mod schedule;

pub use clock::{Clock, SystemClock, TimeParts};
pub use config::ScheduleConfig;
pub use error::CronError;
pub use expression::FieldExpression;
pub use field::FieldDomain;
pub use schedule::{Cron, DEFAULT_TIMEZONE};
