//! Built-in month and weekday name data.

/// Display names for one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HijriMonthInfo {
    pub name: &'static str,
    pub arabic: &'static str,
}

/// Display names for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekdayInfo {
    pub name_short: &'static str,
    pub arabic: &'static str,
}

/// Hijri months 1..=12, stored at index `month - 1`.
pub(crate) static HIJRI_MONTHS: [HijriMonthInfo; 12] = [
    HijriMonthInfo { name: "Muharram", arabic: "مُحَرَّم" },
    HijriMonthInfo { name: "Safar", arabic: "صَفَر" },
    HijriMonthInfo { name: "Rabi' ul-Awwal", arabic: "رَبِيع الأَوَّل" },
    HijriMonthInfo { name: "Rabi' ul-Aakhir", arabic: "رَبِيع الثَّانِي" },
    HijriMonthInfo { name: "Jumada ul-Awwal", arabic: "جُمَادَىٰ الأُولَىٰ" },
    HijriMonthInfo { name: "Jumada ul-Aakhir", arabic: "جُمَادَىٰ الثَّانِيَة" },
    HijriMonthInfo { name: "Rajab", arabic: "رَجَب" },
    HijriMonthInfo { name: "Sha'ban", arabic: "شَعْبَان" },
    HijriMonthInfo { name: "Ramadan", arabic: "رَمَضَان" },
    HijriMonthInfo { name: "Shawwal", arabic: "شَوَّال" },
    HijriMonthInfo { name: "Dhu al-Qa'dah", arabic: "ذُو الْقِعْدَة" },
    HijriMonthInfo { name: "Dhu al-Hijjah", arabic: "ذُو الْحِجَّة" },
];

/// Sunday first, matching [`GregorianDate::weekday`](crate::GregorianDate::weekday).
pub(crate) static WEEKDAYS: [WeekdayInfo; 7] = [
    WeekdayInfo { name_short: "Sun", arabic: "الأحد" },
    WeekdayInfo { name_short: "Mon", arabic: "الاثنين" },
    WeekdayInfo { name_short: "Tue", arabic: "الثلاثاء" },
    WeekdayInfo { name_short: "Wed", arabic: "الأربعاء" },
    WeekdayInfo { name_short: "Thu", arabic: "الخميس" },
    WeekdayInfo { name_short: "Fri", arabic: "الجمعة" },
    WeekdayInfo { name_short: "Sat", arabic: "السبت" },
];
