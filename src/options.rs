//! Converter options and configuration.

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;

/// A known Gregorian date that falls on the first day of a Hijri month.
///
/// Every conversion is an offset from this anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePoint {
    gregorian: GregorianDate,
    hijri_year: i64,
    hijri_month: u32,
}

impl ReferencePoint {
    /// 2024-07-07, the first of Muharram 1446.
    pub const MUHARRAM_1446: ReferencePoint = ReferencePoint {
        gregorian: GregorianDate::new_unchecked(2024, 7, 7),
        hijri_year: 1446,
        hijri_month: 1,
    };

    /// Anchors the first day of `hijri_month` in `hijri_year` at `gregorian`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHijriMonth`] if the month is not 1..=12.
    pub fn new(
        gregorian: GregorianDate,
        hijri_year: i64,
        hijri_month: u32,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&hijri_month) {
            return Err(CalendarError::InvalidHijriMonth { month: hijri_month });
        }
        Ok(Self {
            gregorian,
            hijri_year,
            hijri_month,
        })
    }

    pub fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub fn hijri_year(&self) -> i64 {
        self.hijri_year
    }

    pub fn hijri_month(&self) -> u32 {
        self.hijri_month
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::MUHARRAM_1446
    }
}

/// Options for converting dates.
#[derive(Debug, Clone, Default)]
pub struct ConverterOptions {
    /// The anchor all offsets are measured from.
    pub anchor: ReferencePoint,
    /// Largest distance in days from the anchor that
    /// [`Converter::convert_checked`](crate::Converter::convert_checked)
    /// accepts. `None` accepts every date.
    pub window_days: Option<u32>,
}
