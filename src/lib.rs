//! hijri-calendar - approximate Gregorian to Hijri conversion
//!
//! This crate maps Gregorian dates to Hijri dates by offset from a known
//! reference point, and looks up recurring Islamic observances by Hijri
//! month and day. The conversion is arithmetic, not astronomical; see
//! [`hijri`] for its accuracy.
//!
//! ```
//! use hijri_calendar::{gregorian_to_hijri, lookup};
//!
//! let date = gregorian_to_hijri(2024, 7, 7).unwrap();
//! assert_eq!(date.to_string(), "1 Muharram 1446");
//!
//! let events = lookup(date.month(), date.day());
//! assert_eq!(events[0].name, "Islamic New Year");
//! ```

pub mod error;
pub mod events;
pub mod gregorian;
pub mod grid;
pub mod hijri;
pub mod names;
pub mod options;

mod cache;

pub use cache::month_grid;
pub use error::CalendarError;
pub use events::{events_on, lookup, EventKind, IslamicEvent};
pub use gregorian::GregorianDate;
pub use grid::{CalendarDay, MonthGrid};
pub use hijri::{gregorian_to_hijri, to_hijri, ArabicDisplay, Converter, HijriDate};
pub use names::{month_info, months, weekdays, HijriMonthInfo, WeekdayInfo};
pub use options::{ConverterOptions, ReferencePoint};

#[cfg(feature = "chrono")]
pub use hijri::to_hijri_naive;
