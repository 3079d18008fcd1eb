//! Hijri (Islamic) calendar conversion
//!
//! This module maps Gregorian dates to approximate Hijri dates by counting
//! days from a single reference point (2024-07-07 = 1 Muharram 1446 by
//! default) and splitting the count into months of a fixed mean length.
//!
//! ## Accuracy
//!
//! Every month is treated as 29.53 days long. Real Hijri months are 29 or
//! 30 days and are fixed by observation or calculation of the new crescent,
//! so results are only approximate and drift further from the observed
//! calendar the further a date lies from the reference point. Expect
//! differences of a day or two within a few years of the anchor.
//!
//! ## Normalisation
//!
//! The day offset is held in hundredths of a day, which makes the mean month
//! length the exact integer 2953. Month steps are then found with integer
//! division, so the result does not depend on accumulated floating-point
//! error or on whether the date lies before or after the anchor.
//!
//! After stepping forward the remainder can be less than one whole day. Such
//! a remainder still belongs to the previous month, which then ends on day
//! 29 or 30. The remainder always lands in `[1.00, 30.53)` days, so the
//! floored day is in 1..=30 without any clamping.

use std::fmt;

use tracing::trace;

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::names::{self, HijriMonthInfo};
use crate::options::{ConverterOptions, ReferencePoint};

/// Mean Hijri month length in hundredths of a day (29.53 days).
const MEAN_MONTH: i128 = 2953;

/// One day in hundredths of a day.
const DAY: i128 = 100;

/// A date in the (approximate) Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HijriDate {
    year: i64,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// Creates a Hijri date from its parts.
    ///
    /// The year is not restricted: dates before the Hijra have zero or
    /// negative years.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHijriMonth`] or
    /// [`CalendarError::InvalidHijriDay`] if the month is not 1..=12 or the
    /// day is not 1..=30.
    pub fn new(year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidHijriMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidHijriDay { day });
        }
        Ok(Self { year, month, day })
    }

    /// The Hijri date `days` days after 2024-07-07 (negative for earlier
    /// dates), using the default reference point.
    pub fn from_day_offset(days: i64) -> Self {
        normalize(days, &ReferencePoint::MUHARRAM_1446)
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Month of the year, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1..=30.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Names of this date's month.
    pub fn month_info(&self) -> &'static HijriMonthInfo {
        &names::months()[(self.month - 1) as usize]
    }

    pub fn month_name(&self) -> &'static str {
        self.month_info().name
    }

    pub fn month_name_arabic(&self) -> &'static str {
        self.month_info().arabic
    }

    /// Displays the date with the Arabic month name, e.g. `1 مُحَرَّم 1446`.
    pub fn arabic(&self) -> ArabicDisplay<'_> {
        ArabicDisplay(self)
    }
}

/// Displays `day month year` with the English month name, e.g. `1 Muharram 1446`.
impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Helper returned by [`HijriDate::arabic`].
#[derive(Debug, Clone, Copy)]
pub struct ArabicDisplay<'a>(&'a HijriDate);

impl fmt::Display for ArabicDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.0.day,
            self.0.month_name_arabic(),
            self.0.year
        )
    }
}

/// Split a day offset from `anchor` into Hijri year, month and day.
fn normalize(offset_days: i64, anchor: &ReferencePoint) -> HijriDate {
    // Running value for the day of month, starting at day 1 of the anchor month.
    let value = (1 + i128::from(offset_days)) * DAY;

    let (steps, remainder) = if value > MEAN_MONTH {
        // Largest step count leaving the remainder in (0, MEAN_MONTH]
        let steps = (value - 1) / MEAN_MONTH;
        let remainder = value - steps * MEAN_MONTH;
        if remainder < DAY {
            trace!(
                offset_days,
                remainder = remainder as i64,
                "sub-day remainder kept in previous month"
            );
            (steps - 1, remainder + MEAN_MONTH)
        } else {
            (steps, remainder)
        }
    } else if value < DAY {
        // Smallest step count lifting the remainder to at least one day
        let steps = (DAY - value + MEAN_MONTH - 1) / MEAN_MONTH;
        (-steps, value + steps * MEAN_MONTH)
    } else {
        (0, value)
    };

    let day = (remainder / DAY) as u32;
    debug_assert!((1..=30).contains(&day), "day {} out of range", day);

    let month_index =
        i128::from(anchor.hijri_year()) * 12 + i128::from(anchor.hijri_month() - 1) + steps;
    // Anchors near the ends of the i64 year range saturate instead of wrapping
    let year = i64::try_from(month_index.div_euclid(12)).unwrap_or(if month_index < 0 {
        i64::MIN
    } else {
        i64::MAX
    });
    let month = month_index.rem_euclid(12) as u32 + 1;

    HijriDate { year, month, day }
}

/// Converts Gregorian dates using a configurable reference point.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Convert a Gregorian date. Never fails; accuracy degrades with
    /// distance from the anchor (see the module docs).
    pub fn convert(&self, date: GregorianDate) -> HijriDate {
        let anchor = &self.options.anchor;
        normalize(date.days_since(anchor.gregorian()), anchor)
    }

    /// Convert a Gregorian date, rejecting dates further from the anchor
    /// than the configured window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateRange`] if a window is set and
    /// the date lies outside it.
    pub fn convert_checked(&self, date: GregorianDate) -> Result<HijriDate, CalendarError> {
        let anchor = &self.options.anchor;
        let offset_days = date.days_since(anchor.gregorian());
        if let Some(window_days) = self.options.window_days {
            if offset_days.unsigned_abs() > u64::from(window_days) {
                return Err(CalendarError::InvalidDateRange {
                    offset_days,
                    window_days,
                });
            }
        }
        Ok(normalize(offset_days, anchor))
    }
}

/// Convert a Gregorian date to an approximate Hijri date using the default
/// reference point.
pub fn to_hijri(date: GregorianDate) -> HijriDate {
    HijriDate::from_day_offset(date.days_since(ReferencePoint::MUHARRAM_1446.gregorian()))
}

/// Convert a Gregorian (year, month, day) triple to an approximate Hijri date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidGregorianDate`] if the triple is not a
/// real Gregorian date.
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate, CalendarError> {
    Ok(to_hijri(GregorianDate::new(year, month, day)?))
}

/// Convert a chrono date to an approximate Hijri date.
#[cfg(feature = "chrono")]
pub fn to_hijri_naive(date: chrono::NaiveDate) -> HijriDate {
    to_hijri(GregorianDate::from(date))
}
