use hijri_calendar::{month_info, months, weekdays, HijriDate};

#[test]
fn test_months_order() {
    let months = months();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].name, "Muharram");
    assert_eq!(months[8].name, "Ramadan");
    assert_eq!(months[11].name, "Dhu al-Hijjah");
    assert_eq!(months[11].arabic, "ذُو الْحِجَّة");
}

#[test]
fn test_months_are_distinct() {
    let months = months();
    for (i, a) in months.iter().enumerate() {
        for b in &months[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.arabic, b.arabic);
        }
    }
}

#[test]
fn test_month_info_agrees_with_hijri_date() {
    for month in 1..=12 {
        let date = HijriDate::new(1446, month, 1).unwrap();
        assert_eq!(month_info(month), Some(date.month_info()));
    }
    assert_eq!(month_info(0), None);
}

#[test]
fn test_weekdays() {
    let names: Vec<&str> = weekdays().iter().map(|w| w.name_short).collect();
    assert_eq!(names, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    assert_eq!(weekdays()[0].arabic, "الأحد");
}
