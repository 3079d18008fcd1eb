//! Name tables for Hijri months and weekdays.
//!
//! These exist so presentation code can render headers and labels without
//! keeping its own copy of the tables.

mod builtin;

pub use builtin::{HijriMonthInfo, WeekdayInfo};

use builtin::{HIJRI_MONTHS, WEEKDAYS};

/// All twelve Hijri months, Muharram first and Dhu al-Hijjah last.
pub fn months() -> &'static [HijriMonthInfo; 12] {
    &HIJRI_MONTHS
}

/// Names for a 1-based Hijri month, or `None` outside 1..=12.
pub fn month_info(month: u32) -> Option<&'static HijriMonthInfo> {
    month
        .checked_sub(1)
        .and_then(|index| HIJRI_MONTHS.get(index as usize))
}

/// Weekday names, Sunday first.
pub fn weekdays() -> &'static [WeekdayInfo; 7] {
    &WEEKDAYS
}
