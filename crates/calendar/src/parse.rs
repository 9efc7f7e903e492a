//! nom grammars for the two calendar-string shapes.
//!
//! Lenient: `YYYY-DDD` or `DDD-YYYY`, optionally followed by whitespace and `HH:MM`.
//! Canonical: exactly `YYYY-DDD HH:MM` with fixed digit widths.

use nom::IResult;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, space0, space1, u32 as dec_u32};
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::{preceded, separated_pair, tuple};

/// Raw fields pulled out of a lenient date string, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LenientFields {
    pub first: u32,
    pub second: u32,
    pub time: Option<(u32, u32)>,
}

/// Raw fields pulled out of a canonical date string, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanonicalFields {
    pub year: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

fn clock(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(dec_u32, char(':'), dec_u32)(input)
}

pub(crate) fn lenient(input: &str) -> IResult<&str, LenientFields> {
    let (input, (_, first, _, second, time, _)) = all_consuming(tuple((
        space0,
        dec_u32,
        char('-'),
        dec_u32,
        opt(preceded(space1, clock)),
        space0,
    )))(input)?;
    Ok((
        input,
        LenientFields {
            first,
            second,
            time,
        },
    ))
}

fn digits(width: usize, input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
        str::parse::<u32>,
    )(input)
}

fn four_digits(input: &str) -> IResult<&str, u32> {
    digits(4, input)
}

fn three_digits(input: &str) -> IResult<&str, u32> {
    digits(3, input)
}

fn two_digits(input: &str) -> IResult<&str, u32> {
    digits(2, input)
}

pub(crate) fn canonical(input: &str) -> IResult<&str, CanonicalFields> {
    let (input, (year, _, day, _, hour, _, minute)) = all_consuming(tuple((
        four_digits,
        char('-'),
        three_digits,
        char(' '),
        two_digits,
        char(':'),
        two_digits,
    )))(input)?;
    Ok((
        input,
        CanonicalFields {
            year,
            day,
            hour,
            minute,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_accepts_both_orders_and_optional_time() {
        let (_, f) = lenient("1105-123").unwrap();
        assert_eq!((f.first, f.second, f.time), (1105, 123, None));

        let (_, f) = lenient("123-1105 07:45").unwrap();
        assert_eq!((f.first, f.second, f.time), (123, 1105, Some((7, 45))));

        let (_, f) = lenient("  1100-1   ").unwrap();
        assert_eq!((f.first, f.second), (1100, 1));
    }

    #[test]
    fn lenient_rejects_trailing_garbage() {
        assert!(lenient("1105-123x").is_err());
        assert!(lenient("1105/123").is_err());
        assert!(lenient("1105-123 07").is_err());
    }

    #[test]
    fn canonical_requires_fixed_widths() {
        let (_, f) = canonical("1105-007 09:05").unwrap();
        assert_eq!((f.year, f.day, f.hour, f.minute), (1105, 7, 9, 5));

        assert!(canonical("1105-7 09:05").is_err());
        assert!(canonical("1105-007").is_err());
        assert!(canonical("007-1105 09:05").is_err());
        assert!(canonical("1105-007  09:05").is_err());
        assert!(canonical("1105-007 9:05").is_err());
    }
}
