//! Conversions of a spread of Gregorian dates from 1900 to 2200.
//!
//! Each row of the fixture is a Gregorian date followed by the expected
//! Hijri year, month and day.

use flate2::read::GzDecoder;
use hijri_calendar::{gregorian_to_hijri, HijriDate};
use std::io::Read;

#[derive(Debug)]
struct ReferenceCase {
    gregorian: (i32, u32, u32),
    expected: HijriDate,
}

fn load_test_cases() -> Vec<ReferenceCase> {
    let compressed = include_bytes!("fixtures/reference_dates.tsv.gz");
    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut tsv_data = String::new();
    decoder.read_to_string(&mut tsv_data).unwrap();

    let mut test_cases = Vec::new();

    // First line is the header
    for line in tsv_data.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        assert_eq!(parts.len(), 4, "malformed fixture line: {}", line);

        let ymd: Vec<&str> = parts[0].split('-').collect();
        let gregorian = (
            ymd[0].parse::<i32>().unwrap(),
            ymd[1].parse::<u32>().unwrap(),
            ymd[2].parse::<u32>().unwrap(),
        );
        let expected = HijriDate::new(
            parts[1].parse().unwrap(),
            parts[2].parse().unwrap(),
            parts[3].parse().unwrap(),
        )
        .unwrap();

        test_cases.push(ReferenceCase {
            gregorian,
            expected,
        });
    }

    test_cases
}

#[test]
fn test_reference_dates() {
    let test_cases = load_test_cases();
    assert!(test_cases.len() > 250);

    let mut failures = Vec::new();
    for case in &test_cases {
        let (y, m, d) = case.gregorian;
        let actual = gregorian_to_hijri(y, m, d).unwrap();
        if actual != case.expected {
            failures.push(format!(
                "{:04}-{:02}-{:02}: expected {:?}, got {:?}",
                y, m, d, case.expected, actual
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} conversions failed:\n{}",
        failures.len(),
        test_cases.len(),
        failures.join("\n")
    );
}
