//! The campaign date value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stargen_core::constants::{DAYS_PER_YEAR, EPOCH_DAY, EPOCH_YEAR, MINUTES_PER_DAY};

use crate::CalendarError;
use crate::parse::{self, CanonicalFields};

/// Last year that still prints in the four-digit canonical form.
pub const MAX_YEAR: u32 = 9_999;

/// One instant on the campaign calendar, minute resolution.
///
/// Years run from 0 to [`MAX_YEAR`]. Field order gives the derived `Ord`
/// chronological meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CampaignDate {
    year: u32,
    day: u16,
    hour: u8,
    minute: u8,
}

impl CampaignDate {
    /// Build a date, validating day-of-year, hour and minute ranges.
    pub fn new(year: u32, day: u32, hour: u32, minute: u32) -> Result<Self, CalendarError> {
        Self::checked(year, day, hour, minute, || format!("{year}-{day} {hour}:{minute}"))
    }

    /// The reference epoch: year 1100, day 1, 00:00.
    pub const fn epoch() -> Self {
        Self {
            year: EPOCH_YEAR,
            day: EPOCH_DAY as u16,
            hour: 0,
            minute: 0,
        }
    }

    /// Parse either `YYYY-DDD` or `DDD-YYYY`, with an optional ` HH:MM` suffix.
    ///
    /// Whichever component exceeds 999 is the year; when neither does the
    /// first is taken as the year. Blank input yields the epoch.
    pub fn parse_lenient(input: &str) -> Result<Self, CalendarError> {
        if input.trim().is_empty() {
            return Ok(Self::epoch());
        }
        let (_, fields) = parse::lenient(input).map_err(|_| CalendarError::Malformed {
            input: input.to_string(),
        })?;
        let (year, day) = if fields.first <= 999 && fields.second > 999 {
            (fields.second, fields.first)
        } else {
            (fields.first, fields.second)
        };
        let (hour, minute) = fields.time.unwrap_or((0, 0));
        Self::checked(year, day, hour, minute, || input.to_string())
    }

    /// Parse the strict canonical `YYYY-DDD HH:MM` form, rejecting anything else.
    pub fn parse_canonical(input: &str) -> Result<Self, CalendarError> {
        let (_, CanonicalFields {
            year,
            day,
            hour,
            minute,
        }) = parse::canonical(input).map_err(|_| CalendarError::NonCanonical {
            input: input.to_string(),
        })?;
        Self::checked(year, day, hour, minute, || input.to_string())
    }

    fn checked(
        year: u32,
        day: u32,
        hour: u32,
        minute: u32,
        input: impl Fn() -> String,
    ) -> Result<Self, CalendarError> {
        let out_of_range = |field: &'static str, value: u32| CalendarError::OutOfRange {
            input: input(),
            field,
            value,
        };
        if year > MAX_YEAR {
            return Err(out_of_range("year", year));
        }
        if !(1..=DAYS_PER_YEAR).contains(&day) {
            return Err(out_of_range("day of year", day));
        }
        if hour > 23 {
            return Err(out_of_range("hour", hour));
        }
        if minute > 59 {
            return Err(out_of_range("minute", minute));
        }
        Ok(Self {
            year,
            day: day as u16,
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn day(&self) -> u32 {
        u32::from(self.day)
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Signed whole minutes since the reference epoch.
    pub fn minutes_since_epoch(&self) -> i64 {
        let years = i64::from(self.year) - i64::from(EPOCH_YEAR);
        let days = years * i64::from(DAYS_PER_YEAR) + i64::from(self.day) - i64::from(EPOCH_DAY);
        days * i64::from(MINUTES_PER_DAY) + i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Continuous day count since the reference epoch; hours and minutes are fractional.
    pub fn days_since_epoch(&self) -> f64 {
        self.minutes_since_epoch() as f64 / f64::from(MINUTES_PER_DAY)
    }

    /// Rebuild a date from a minute offset.
    ///
    /// Offsets before year 0 clamp to `0000-001 00:00`, offsets past [`MAX_YEAR`]
    /// to its last minute.
    pub fn from_minutes_since_epoch(minutes: i64) -> Self {
        let per_day = i64::from(MINUTES_PER_DAY);
        let per_year = i64::from(DAYS_PER_YEAR);
        let days = minutes.div_euclid(per_day);
        let minute_of_day = minutes.rem_euclid(per_day);
        let year = i64::from(EPOCH_YEAR) + days.div_euclid(per_year);
        if year < 0 {
            return Self {
                year: 0,
                day: 1,
                hour: 0,
                minute: 0,
            };
        }
        if year > i64::from(MAX_YEAR) {
            return Self {
                year: MAX_YEAR,
                day: DAYS_PER_YEAR as u16,
                hour: 23,
                minute: 59,
            };
        }
        Self {
            year: year as u32,
            day: (days.rem_euclid(per_year) + 1) as u16,
            hour: (minute_of_day / 60) as u8,
            minute: (minute_of_day % 60) as u8,
        }
    }

    /// Nearest-minute date for a fractional day offset from the epoch.
    pub fn from_days_since_epoch(days: f64) -> Self {
        if !days.is_finite() {
            return Self::epoch();
        }
        let minutes = (days * f64::from(MINUTES_PER_DAY)).round();
        Self::from_minutes_since_epoch(minutes as i64)
    }

    /// Advance (or rewind, for negative `minutes`) across day and year boundaries.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self::from_minutes_since_epoch(self.minutes_since_epoch().saturating_add(minutes))
    }

    /// Minutes from `self` to `later`; negative when `later` precedes `self`.
    pub fn minutes_until(&self, later: &Self) -> i64 {
        later.minutes_since_epoch() - self.minutes_since_epoch()
    }
}

impl Default for CampaignDate {
    fn default() -> Self {
        Self::epoch()
    }
}

impl fmt::Display for CampaignDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:03} {:02}:{:02}",
            self.year, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for CampaignDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}

impl Serialize for CampaignDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CampaignDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
