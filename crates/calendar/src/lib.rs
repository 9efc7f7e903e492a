//! Campaign calendar: parsing, ordering and elapsed-time helpers.
//!
//! The calendar has 365-day years with no leap days and a reference epoch of
//! year 1100, day 1, 00:00. Two string shapes are understood:
//!
//! - lenient, for orbital time axes: `YYYY-DDD` or `DDD-YYYY`, optional ` HH:MM`;
//! - canonical, for time ordering: exactly `YYYY-DDD HH:MM`.
//!
//! The canonical comparators never guess. A malformed string is an error, since
//! a misread date would silently reorder events for anything sorting by it.

use std::cmp::Ordering;

use thiserror::Error;

mod date;
mod parse;

pub use date::{CampaignDate, MAX_YEAR};

/// Errors surfaced while parsing or comparing campaign dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("date `{input}` is neither YYYY-DDD nor DDD-YYYY (optionally followed by HH:MM)")]
    Malformed { input: String },
    #[error("date `{input}` is not in canonical YYYY-DDD HH:MM form")]
    NonCanonical { input: String },
    #[error("{field} {value} is out of range in `{input}`")]
    OutOfRange {
        input: String,
        field: &'static str,
        value: u32,
    },
}

/// Parse a lenient date string; blank input yields the reference epoch.
pub fn parse_date(input: &str) -> Result<CampaignDate, CalendarError> {
    CampaignDate::parse_lenient(input)
}

/// Continuous day count from the reference epoch for a lenient date string.
pub fn days_since_epoch(input: &str) -> Result<f64, CalendarError> {
    Ok(parse_date(input)?.days_since_epoch())
}

/// Chronological ordering of two canonical `YYYY-DDD HH:MM` strings.
pub fn compare_dates(a: &str, b: &str) -> Result<Ordering, CalendarError> {
    let a = CampaignDate::parse_canonical(a)?;
    let b = CampaignDate::parse_canonical(b)?;
    Ok(a.cmp(&b))
}

/// Signed minutes from `a` to `b`, both canonical `YYYY-DDD HH:MM` strings.
pub fn minutes_between(a: &str, b: &str) -> Result<i64, CalendarError> {
    let a = CampaignDate::parse_canonical(a)?;
    let b = CampaignDate::parse_canonical(b)?;
    Ok(a.minutes_until(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_orders_chronologically() {
        assert_eq!(
            compare_dates("1105-001 00:00", "1104-365 23:59").unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            compare_dates("1105-010 08:00", "1105-010 08:00").unwrap(),
            Ordering::Equal
        );
        assert_eq!(
            compare_dates("1105-010 07:59", "1105-010 08:00").unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn comparators_reject_lenient_shapes() {
        let err = compare_dates("1105-010", "1105-010 08:00").unwrap_err();
        assert_eq!(
            err,
            CalendarError::NonCanonical {
                input: "1105-010".to_string()
            }
        );
        assert!(minutes_between("1105-010 08:00", "010-1105 08:00").is_err());
        assert!(minutes_between("", "1105-010 08:00").is_err());
    }

    #[test]
    fn minutes_between_is_signed() {
        assert_eq!(minutes_between("1105-010 08:00", "1105-011 09:30").unwrap(), 1_530);
        assert_eq!(minutes_between("1105-011 09:30", "1105-010 08:00").unwrap(), -1_530);
        assert_eq!(
            minutes_between("1104-365 00:00", "1105-001 00:00").unwrap(),
            1_440
        );
    }

    #[test]
    fn days_since_epoch_defaults_blank_to_zero() {
        assert_eq!(days_since_epoch("").unwrap(), 0.0);
        assert_eq!(days_since_epoch("1100-001 00:00").unwrap(), 0.0);
        assert_eq!(days_since_epoch("1101-001").unwrap(), 365.0);
        assert!((days_since_epoch("1100-001 06:00").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = parse_date("soon").unwrap_err();
        assert!(err.to_string().contains("`soon`"));
    }
}
