//! Proleptic Gregorian dates and day-number arithmetic
//!
//! Conversion works on a day count rather than on calendar fields, so every
//! Gregorian date is mapped to its *day number*: whole days since
//! 1970-01-01 (day 0). Dates before the epoch have negative day numbers.
//!
//! The leap-year rule is the full Gregorian one (divisible by 4, except
//! centuries not divisible by 400) applied to all years, including those
//! before the 1582 reform.

use std::fmt;

use crate::error::CalendarError;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Day number of 0000-03-01 relative to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year.
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Convert a (year, month, day) triple to its day number.
///
/// The triple is not validated; callers go through [`GregorianDate::new`].
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    // Years start in March so the leap day is the last day of the year.
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
///
/// Returns `None` when shifting `days` to the March-based epoch overflows.
fn civil_from_days(days: i64) -> Option<(i64, u32, u32)> {
    let z = days.checked_add(EPOCH_SHIFT)?;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    Some((year, month, day))
}

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Creates a date from year, month (1-12) and day of month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGregorianDate`] if the month is not
    /// 1..=12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date the caller knows to be valid.
    pub(crate) const fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Builds the date with the given day number (days since 1970-01-01).
    ///
    /// Returns `None` if the resulting year does not fit in an `i32`.
    pub fn from_day_number(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days)?;
        let year = i32::try_from(year).ok()?;
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whole days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Signed number of whole days from `other` to `self`.
    pub fn days_since(&self, other: GregorianDate) -> i64 {
        self.day_number() - other.day_number()
    }

    /// Day of the week: 0 = Sunday, 1 = Monday, ..., 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        // 1970-01-01 was a Thursday
        (self.day_number() + 4).rem_euclid(7) as u32
    }

    /// The following day.
    pub fn succ(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() + 1)
    }

    /// The preceding day.
    pub fn pred(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() - 1)
    }

    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }

    pub fn last_of_month(&self) -> Self {
        Self {
            day: days_in_month(self.year, self.month),
            ..*self
        }
    }

    /// Moves the date by whole months, keeping the day of month where it
    /// exists and otherwise using the last day of the target month.
    ///
    /// Returns `None` if the target year does not fit in an `i32`.
    pub fn add_months(&self, months: i32) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = index.rem_euclid(12) as u32 + 1;
        let day = self.day.min(days_in_month(year, month));
        Some(Self { year, month, day })
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<GregorianDate> for chrono::NaiveDate {
    type Error = CalendarError;

    /// Fails for dates outside chrono's supported year range.
    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        chrono::NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or(
            CalendarError::InvalidGregorianDate {
                year: date.year,
                month: date.month,
                day: date.day,
            },
        )
    }
}
