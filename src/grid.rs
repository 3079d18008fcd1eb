//! Month view data: the days shown for one Gregorian month.
//!
//! A grid covers whole weeks, Sunday to Saturday, so it starts on the Sunday
//! on or before the 1st and ends on the Saturday on or after the last day of
//! the month. Each cell carries its Hijri date and observances.

use tracing::debug;

use crate::error::CalendarError;
use crate::events::{self, IslamicEvent};
use crate::gregorian::GregorianDate;
use crate::hijri::{to_hijri, HijriDate};

/// One cell of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarDay {
    pub date: GregorianDate,
    pub hijri: HijriDate,
    pub events: Vec<&'static IslamicEvent>,
    /// False for the leading and trailing days of neighbouring months.
    pub is_current_month: bool,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn has_major_event(&self) -> bool {
        self.events.iter().any(|event| event.is_major())
    }
}

/// The days displayed for one Gregorian month, in whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Builds the grid for a Gregorian month.
    ///
    /// `today`, when given, marks the matching cell.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGregorianDate`] if the month is not
    /// 1..=12, or [`CalendarError::DateOutOfRange`] if the padding weeks
    /// would leave the supported year range.
    pub fn build(
        year: i32,
        month: u32,
        today: Option<GregorianDate>,
    ) -> Result<Self, CalendarError> {
        let first = GregorianDate::new(year, month, 1)?;
        let last = first.last_of_month();

        let start = first.day_number() - i64::from(first.weekday());
        let end = last.day_number() + i64::from(6 - last.weekday());

        let days = (start..=end)
            .map(|day_number| -> Result<CalendarDay, CalendarError> {
                let date = GregorianDate::from_day_number(day_number)
                    .ok_or(CalendarError::DateOutOfRange { day_number })?;
                let hijri = to_hijri(date);
                Ok(CalendarDay {
                    date,
                    hijri,
                    events: events::lookup(hijri.month(), hijri.day()),
                    is_current_month: date.year() == year && date.month() == month,
                    is_today: today == Some(date),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(year, month, cells = days.len(), "built month grid");

        Ok(Self { year, month, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// All cells, row by row.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Hijri date of the first day of the month, used for the month heading.
    pub fn header(&self) -> HijriDate {
        to_hijri(GregorianDate::new_unchecked(self.year, self.month, 1))
    }

    /// Hijri dates of the first and last day of the month.
    pub fn hijri_span(&self) -> (HijriDate, HijriDate) {
        let first = GregorianDate::new_unchecked(self.year, self.month, 1);
        (to_hijri(first), to_hijri(first.last_of_month()))
    }

    /// Cells in this month that carry at least one observance.
    pub fn days_with_events(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days
            .iter()
            .filter(|day| day.is_current_month && day.has_events())
    }
}
