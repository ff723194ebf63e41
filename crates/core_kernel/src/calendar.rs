//! Calendar dates with self-contained Gregorian arithmetic
//!
//! This module provides a validated day/month/year value type together with
//! leap-year handling, weekday derivation, and one-day stepping. Validation,
//! weekday derivation, and stepping all read the same days-per-month table,
//! so the three can never disagree about month lengths or leap years.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when constructing or stepping a calendar date
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Year must be positive; year zero and negative years are rejected
    #[error("invalid year: {0}")]
    InvalidYear(i32),

    /// Month must be in 1..=12
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    /// Day does not exist in the given month and year
    #[error("invalid day {day} for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Input string is not of the form YYYY-MM-DD
    #[error("unparseable calendar date: {0:?}")]
    Unparseable(String),
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the English name of the day
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns true if `year` is a Gregorian leap year
///
/// A year is a leap year when it is divisible by 4, unless it is divisible
/// by 100 without also being divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`
///
/// Returns `None` when `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// A validated Gregorian calendar date
///
/// A `CalendarDate` is immutable after construction and always holds a day
/// that exists in its month and year. Ordering compares year, then month,
/// then day, ascending. The canonical rendering is the zero-padded
/// `YYYY-MM-DD` form, which is also the serde representation.
///
/// # Examples
///
/// ```rust
/// use core_kernel::{CalendarDate, Weekday};
///
/// let date = CalendarDate::from_ymd(2000, 1, 1).unwrap();
/// assert_eq!(date.to_string(), "2000-01-01");
/// assert_eq!(date.weekday(), Weekday::Saturday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    // Field order carries the derived Ord: year, then month, then day.
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date from year, month, and day
    ///
    /// Validation order: year first (must be positive), then month (1..=12),
    /// then day against the length of the resolved month.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError` naming whichever component is invalid. No
    /// partially constructed date is observable on failure.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if year <= 0 {
            return Err(CalendarError::InvalidYear(year));
        }
        let length = days_in_month(year, month).ok_or(CalendarError::InvalidMonth(month))?;
        if day < 1 || day > length {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of the month
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the day of the week via the anchor-day formula
    ///
    /// The computation is closed-form arithmetic over the date components;
    /// no platform calendar is consulted. The century adjustment is a
    /// lookup covering centuries 16 through 21 (years 1600..=2199); outside
    /// that range the adjustment falls back to zero and the result is not
    /// guaranteed to match the proleptic Gregorian calendar.
    pub fn weekday(&self) -> Weekday {
        let year_of_century = self.year % 100;
        let twelves = year_of_century / 12;
        let remainder = year_of_century % 12;
        let fours = remainder / 4;

        let mut month_code = match self.month {
            1 | 10 => 1,
            2 | 3 | 11 => 4,
            4 | 7 => 0,
            5 => 2,
            6 => 5,
            8 => 3,
            // 9 | 12, the only arms left for a validated month
            _ => 6,
        };
        if (self.month == 1 || self.month == 2) && is_leap_year(self.year) {
            month_code += 6;
        }

        let century_code = match self.year / 100 {
            16 | 20 => 6,
            17 | 21 => 4,
            18 => 2,
            _ => 0,
        };

        let total = twelves + remainder + fours + self.day as i32 + month_code + century_code;
        match total % 7 {
            0 => Weekday::Saturday,
            1 => Weekday::Sunday,
            2 => Weekday::Monday,
            3 => Weekday::Tuesday,
            4 => Weekday::Wednesday,
            5 => Weekday::Thursday,
            _ => Weekday::Friday,
        }
    }

    /// Returns the next calendar day
    ///
    /// Rolls over month and year boundaries, including leap days, using the
    /// same days-per-month table as construction.
    ///
    /// # Errors
    ///
    /// Fails only when the successor year would overflow.
    pub fn successor(&self) -> Result<Self, CalendarError> {
        if self.day < self.length_of_month() {
            Self::from_ymd(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::from_ymd(self.year, self.month + 1, 1)
        } else {
            let next_year = self
                .year
                .checked_add(1)
                .ok_or(CalendarError::InvalidYear(self.year))?;
            Self::from_ymd(next_year, 1, 1)
        }
    }

    /// Returns the previous calendar day
    ///
    /// # Errors
    ///
    /// Fails when stepping below year 1, the first representable year.
    pub fn predecessor(&self) -> Result<Self, CalendarError> {
        if self.day > 1 {
            Self::from_ymd(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            let prev_month = self.month - 1;
            let length = days_in_month(self.year, prev_month)
                .expect("month validated at construction");
            Self::from_ymd(self.year, prev_month, length)
        } else {
            Self::from_ymd(self.year - 1, 12, 31)
        }
    }

    fn length_of_month(&self) -> u32 {
        days_in_month(self.year, self.month).expect("month validated at construction")
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || CalendarError::Unparseable(s.to_string());
        let mut parts = s.split('-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(unparseable)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(unparseable)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(unparseable)?;
        if parts.next().is_some() {
            return Err(unparseable());
        }
        Self::from_ymd(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid calendar date: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_round_trips_components() {
        let date = CalendarDate::from_ymd(1987, 6, 21).unwrap();
        assert_eq!(date.year(), 1987);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 21);
    }

    #[test]
    fn test_year_validated_before_month() {
        // Both year and month are invalid; the year error wins.
        assert_eq!(
            CalendarDate::from_ymd(0, 13, 1),
            Err(CalendarError::InvalidYear(0))
        );
        assert_eq!(
            CalendarDate::from_ymd(-44, 3, 15),
            Err(CalendarError::InvalidYear(-44))
        );
    }

    #[test]
    fn test_month_validated_before_day() {
        assert_eq!(
            CalendarDate::from_ymd(2024, 0, 99),
            Err(CalendarError::InvalidMonth(0))
        );
        assert_eq!(
            CalendarDate::from_ymd(2024, 13, 1),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_day_validated_against_month_length() {
        assert_eq!(
            CalendarDate::from_ymd(2023, 2, 29),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            CalendarDate::from_ymd(1900, 2, 29),
            Err(CalendarError::InvalidDay {
                year: 1900,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            CalendarDate::from_ymd(2024, 4, 31),
            Err(CalendarError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        );
        assert_eq!(
            CalendarDate::from_ymd(2024, 6, 0),
            Err(CalendarError::InvalidDay {
                year: 2024,
                month: 6,
                day: 0
            })
        );
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month_table() {
        assert_eq!(days_in_month(2023, 1), Some(31));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_weekday_known_anchors() {
        // Cross-checked against an independent calendar; see also the
        // reference tests in tests/calendar_reference.rs.
        let anchors = [
            ((2000, 1, 1), Weekday::Saturday),
            ((1999, 12, 31), Weekday::Friday),
            ((2024, 2, 29), Weekday::Thursday),
            ((1776, 7, 4), Weekday::Thursday),
            ((1900, 3, 1), Weekday::Thursday),
            ((1600, 1, 1), Weekday::Saturday),
            ((2022, 9, 15), Weekday::Thursday),
        ];
        for ((y, m, d), expected) in anchors {
            let date = CalendarDate::from_ymd(y, m, d).unwrap();
            assert_eq!(date.weekday(), expected, "weekday of {}", date);
        }
    }

    #[test]
    fn test_successor_within_month() {
        let date = CalendarDate::from_ymd(2024, 6, 14).unwrap();
        assert_eq!(date.successor().unwrap().to_string(), "2024-06-15");
    }

    #[test]
    fn test_successor_over_leap_day() {
        let date = CalendarDate::from_ymd(2024, 2, 28).unwrap();
        let leap_day = date.successor().unwrap();
        assert_eq!(leap_day.to_string(), "2024-02-29");
        assert_eq!(leap_day.successor().unwrap().to_string(), "2024-03-01");
    }

    #[test]
    fn test_successor_skips_leap_day_in_common_year() {
        let date = CalendarDate::from_ymd(2023, 2, 28).unwrap();
        assert_eq!(date.successor().unwrap().to_string(), "2023-03-01");
    }

    #[test]
    fn test_successor_over_year_end() {
        let date = CalendarDate::from_ymd(1999, 12, 31).unwrap();
        assert_eq!(date.successor().unwrap().to_string(), "2000-01-01");
    }

    #[test]
    fn test_predecessor_over_month_and_year_boundaries() {
        let date = CalendarDate::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(date.predecessor().unwrap().to_string(), "1999-12-31");

        let date = CalendarDate::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(date.predecessor().unwrap().to_string(), "2024-02-29");

        let date = CalendarDate::from_ymd(2023, 3, 1).unwrap();
        assert_eq!(date.predecessor().unwrap().to_string(), "2023-02-28");
    }

    #[test]
    fn test_predecessor_below_first_year_fails() {
        let date = CalendarDate::from_ymd(1, 1, 1).unwrap();
        assert_eq!(date.predecessor(), Err(CalendarError::InvalidYear(0)));
    }

    #[test]
    fn test_ordering_is_year_month_day() {
        let a = CalendarDate::from_ymd(1999, 12, 31).unwrap();
        let b = CalendarDate::from_ymd(2000, 1, 1).unwrap();
        let c = CalendarDate::from_ymd(2000, 1, 2).unwrap();
        let d = CalendarDate::from_ymd(2000, 2, 1).unwrap();
        assert!(a < b && b < c && c < d);
        assert_eq!(b, CalendarDate::from_ymd(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_display_zero_pads() {
        let date = CalendarDate::from_ymd(33, 4, 5).unwrap();
        assert_eq!(date.to_string(), "0033-04-05");
    }

    #[test]
    fn test_from_str_round_trip_and_rejection() {
        let date: CalendarDate = "2024-02-29".parse().unwrap();
        assert_eq!(date, CalendarDate::from_ymd(2024, 2, 29).unwrap());

        assert!("2023-02-29".parse::<CalendarDate>().is_err());
        assert!("not-a-date".parse::<CalendarDate>().is_err());
        assert!("2024-02".parse::<CalendarDate>().is_err());
        assert!("2024-02-29-01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let date = CalendarDate::from_ymd(2000, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2000-01-01\"");

        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);

        assert!(serde_json::from_str::<CalendarDate>("\"2023-02-29\"").is_err());
    }
}
