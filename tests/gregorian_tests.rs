use hijri_calendar::gregorian::{days_in_month, is_leap_year};
use hijri_calendar::{CalendarError, GregorianDate};

#[test]
fn test_new_rejects_invalid_dates() {
    assert_eq!(
        GregorianDate::new(2023, 2, 29),
        Err(CalendarError::InvalidGregorianDate {
            year: 2023,
            month: 2,
            day: 29
        })
    );
    assert!(GregorianDate::new(2024, 13, 1).is_err());
    assert!(GregorianDate::new(2024, 4, 31).is_err());
    assert!(GregorianDate::new(2024, 4, 0).is_err());
}

#[test]
fn test_day_number_roundtrip() {
    for &(y, m, d) in &[
        (1, 1, 1),
        (1582, 10, 15),
        (1900, 2, 28),
        (2000, 2, 29), // Leap year
        (2024, 7, 7),
        (-44, 3, 15),
    ] {
        let date = GregorianDate::new(y, m, d).unwrap();
        let back = GregorianDate::from_day_number(date.day_number()).unwrap();
        assert_eq!(date, back, "Roundtrip failed for {}-{}-{}", y, m, d);
    }
}

#[test]
fn test_days_since() {
    let anchor = GregorianDate::new(2024, 7, 7).unwrap();
    let later = GregorianDate::new(2025, 7, 7).unwrap();
    assert_eq!(later.days_since(anchor), 365);
    assert_eq!(anchor.days_since(later), -365);
}

#[test]
fn test_succ_and_pred_cross_year() {
    let eve = GregorianDate::new(2024, 12, 31).unwrap();
    let new_year = GregorianDate::new(2025, 1, 1).unwrap();
    assert_eq!(eve.succ(), Some(new_year));
    assert_eq!(new_year.pred(), Some(eve));
}

#[test]
fn test_year_range_limits() {
    let last = GregorianDate::new(i32::MAX, 12, 31).unwrap();
    assert_eq!(last.succ(), None);
    let first = GregorianDate::new(i32::MIN, 1, 1).unwrap();
    assert_eq!(first.pred(), None);
}

#[test]
fn test_month_bounds() {
    let date = GregorianDate::new(2024, 2, 10).unwrap();
    assert_eq!(date.first_of_month(), GregorianDate::new(2024, 2, 1).unwrap());
    assert_eq!(date.last_of_month(), GregorianDate::new(2024, 2, 29).unwrap());
    assert_eq!(days_in_month(2100, 2), 28);
    assert!(!is_leap_year(2100));
}

#[test]
fn test_add_months_navigation() {
    let date = GregorianDate::new(2024, 12, 15).unwrap();
    assert_eq!(date.add_months(1), GregorianDate::new(2025, 1, 15).ok());
    assert_eq!(date.add_months(-12), GregorianDate::new(2023, 12, 15).ok());
}

#[test]
fn test_display() {
    let date = GregorianDate::new(2024, 7, 7).unwrap();
    assert_eq!(date.to_string(), "2024-07-07");
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_conversions() {
    use chrono::NaiveDate;

    let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let date = GregorianDate::from(naive);
    assert_eq!(date, GregorianDate::new(2024, 2, 29).unwrap());
    assert_eq!(NaiveDate::try_from(date), Ok(naive));

    let far = GregorianDate::new(i32::MAX, 1, 1).unwrap();
    assert!(NaiveDate::try_from(far).is_err());
}
