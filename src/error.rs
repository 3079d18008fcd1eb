//! Error types for date validation and checked conversion.

use thiserror::Error;

/// Errors that can occur when building calendar values or converting with a
/// supported window.
///
/// The plain conversion and event lookup never fail; only validating
/// constructors and [`Converter::convert_checked`](crate::Converter::convert_checked)
/// return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    #[error("invalid hijri month: {month} (must be 1..=12)")]
    InvalidHijriMonth { month: u32 },

    #[error("invalid hijri day: {day} (must be 1..=30)")]
    InvalidHijriDay { day: u32 },

    #[error("day number {day_number} is outside the supported gregorian year range")]
    DateOutOfRange { day_number: i64 },

    #[error("date is {offset_days} days from the reference point, outside the supported window of {window_days} days")]
    InvalidDateRange { offset_days: i64, window_days: u32 },
}
