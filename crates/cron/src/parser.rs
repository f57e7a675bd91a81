//! Grammar parser for single cron fields.
//!
//! Resolves one field's raw text into the set of integers it matches, using
//! a [`FieldDomain`] for bounds, alias lookup, and error naming. The grammar
//! per field is:
//!
//! ```text
//! expression := repetition (',' repetition)*
//! repetition := value ('/' step)?
//! value      := '*' | atom | atom '-' atom
//! atom       := number | alias-name
//! step       := number            (not '*', not empty, not 0)
//! ```

use std::collections::BTreeSet;

use crate::error::CronError;
use crate::field::FieldDomain;

/// Parse one field of a cron expression into its set of matching values.
///
/// Comma-separated repetitions are resolved left to right and unioned; the
/// set deduplicates overlaps. Every resolved value lies within the domain
/// bounds, checked before range expansion.
pub(crate) fn parse_field(raw: &str, domain: &FieldDomain) -> Result<BTreeSet<u8>, CronError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(domain.invalid(raw));
    }

    let mut values = BTreeSet::new();
    for repetition in raw.split(',') {
        expand_repetition(raw, repetition, domain, &mut values)?;
    }
    Ok(values)
}

/// Resolve a single repetition and union its values into `out`.
fn expand_repetition(
    field: &str,
    repetition: &str,
    domain: &FieldDomain,
    out: &mut BTreeSet<u8>,
) -> Result<(), CronError> {
    // A repetition must have a value part; "/2" has none.
    if repetition.starts_with('/') {
        return Err(domain.invalid(field));
    }

    let mut parts = repetition.split('/');
    let value = parts.next().unwrap_or_default();
    let step = parts.next();
    if parts.next().is_some() {
        return Err(domain.invalid(field));
    }

    let increment = match step {
        None => 1,
        // Rejects "*", the empty string, and anything non-numeric; a zero
        // step would never advance past the start value.
        Some(text) => match text.trim().parse::<u8>() {
            Ok(step) if step > 0 => step,
            _ => return Err(domain.invalid(field)),
        },
    };

    let (start, end) = value_range(field, value, step.is_some(), domain)?;
    if start < domain.start || end > domain.end || start > end {
        return Err(domain.invalid(field));
    }

    out.extend((start..=end).step_by(increment as usize));
    Ok(())
}

/// Resolve the value part of a repetition into an inclusive `(start, end)`.
///
/// A bare atom with a step means "from the atom to the domain end"; without
/// a step it pins a single value.
fn value_range(
    field: &str,
    value: &str,
    stepped: bool,
    domain: &FieldDomain,
) -> Result<(u8, u8), CronError> {
    let value = value.trim();
    if value == "*" {
        return Ok((domain.start, domain.end));
    }

    match value.split_once('-') {
        None => {
            let atom = resolve_atom(field, value, domain)?;
            let end = if stepped { domain.end } else { atom };
            Ok((atom, end))
        }
        Some((low, high)) => {
            // A range cannot start with a wildcard, and "a-b-c" is not a range.
            if low.trim() == "*" || high.contains('-') {
                return Err(domain.invalid(field));
            }
            Ok((
                resolve_atom(field, low, domain)?,
                resolve_atom(field, high, domain)?,
            ))
        }
    }
}

/// Resolve an atom to its integer value: alias table first, then a plain
/// numeric parse. Anything else is a validation failure for the field.
fn resolve_atom(field: &str, atom: &str, domain: &FieldDomain) -> Result<u8, CronError> {
    let atom = atom.trim();
    if let Some(value) = domain.alias(atom) {
        return Ok(value);
    }
    atom.parse::<u8>().map_err(|_| domain.invalid(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    fn minutes(raw: &str) -> BTreeSet<u8> {
        parse_field(raw, &field::MINUTE).unwrap()
    }

    #[test]
    fn wildcard_expands_to_full_domain() {
        assert_eq!(minutes("*").len(), 60);
        assert_eq!(parse_field("*", &field::MONTH).unwrap().len(), 12);
    }

    #[test]
    fn bare_value_pins_a_single_minute() {
        assert_eq!(minutes("30"), BTreeSet::from([30]));
    }

    #[test]
    fn stepped_bare_value_runs_to_domain_end() {
        assert_eq!(minutes("54/2"), BTreeSet::from([54, 56, 58]));
    }

    #[test]
    fn stepped_range_clips_at_range_end() {
        assert_eq!(minutes("10-15/3"), BTreeSet::from([10, 13]));
    }

    #[test]
    fn repetitions_union_and_deduplicate() {
        assert_eq!(minutes("3,5,3-6"), BTreeSet::from([3, 4, 5, 6]));
    }

    #[test]
    fn whitespace_around_atoms_is_tolerated() {
        assert_eq!(minutes("3, 5"), BTreeSet::from([3, 5]));
        assert_eq!(minutes("1 - 5"), BTreeSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn zero_step_is_rejected_in_any_spelling() {
        assert!(parse_field("5/0", &field::MINUTE).is_err());
        assert!(parse_field("5/00", &field::MINUTE).is_err());
    }

    #[test]
    fn step_must_be_numeric() {
        // Alias names are values, not steps.
        assert!(parse_field("1/feb", &field::MONTH).is_err());
        assert!(parse_field("5/x", &field::MINUTE).is_err());
    }

    #[test]
    fn bounds_are_checked_before_expansion() {
        assert!(parse_field("0-60", &field::MINUTE).is_err());
        assert!(parse_field("24", &field::HOUR).is_err());
        assert!(parse_field("0", &field::DAY_OF_MONTH).is_err());
    }

    #[test]
    fn error_names_the_segment() {
        let err = parse_field("60", &field::MINUTE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid cron expression \"60\" for minute field"
        );
    }
}
