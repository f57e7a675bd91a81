//! Parsed single-field expressions and membership queries.

use std::collections::BTreeSet;

use crate::error::CronError;
use crate::field::FieldDomain;
use crate::parser;


/// One parsed field of a cron expression.
///
/// Owns the raw trimmed text and the resolved set of matching values. Both
/// are fixed at construction; replacing a field on a schedule builds a new
/// `FieldExpression` rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExpression {
    raw: String,
    domain: &'static FieldDomain,
    values: BTreeSet<u8>,
}

impl FieldExpression {
    /// Parse `raw` against `domain`.
    ///
    /// Every resolved value is guaranteed to lie within the domain bounds.
    pub fn parse(raw: &str, domain: &'static FieldDomain) -> Result<Self, CronError> {
        let raw = raw.trim().to_string();
        let values = parser::parse_field(&raw, domain)?;
        Ok(Self {
            raw,
            domain,
            values,
        })
    }

    /// The trimmed text this expression was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The domain this expression was parsed against.
    pub fn domain(&self) -> &'static FieldDomain {
        self.domain
    }

    /// The sorted set of values this expression matches.
    pub fn values(&self) -> &BTreeSet<u8> {
        &self.values
    }

    /// True if `value` is matched by this expression.
    ///
    /// On wrapping domains a stored 7 also answers for a queried 0: cron
    /// weekdays call Sunday both 0 and 7, and the set keeps whatever the
    /// user wrote. The equivalence is one-way; a stored 0 does not answer
    /// for a queried 7.
    pub fn matches(&self, value: u8) -> bool {
        self.values.contains(&value)
            || (self.domain.wrap && value == 0 && self.values.contains(&7))
    }
}
