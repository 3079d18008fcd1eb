//! Recurring Islamic observances keyed by Hijri month and day.
//!
//! The catalog is a fixed table; lookups scan it in declaration order and
//! never fail. Out-of-range months or days simply match nothing.

use crate::gregorian::GregorianDate;
use crate::hijri::to_hijri;

/// How prominently an observance is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    Major,
    Minor,
}

impl EventKind {
    /// Human readable label, e.g. `"Major Event"`.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Major => "Major Event",
            EventKind::Minor => "Minor Event",
        }
    }
}

/// An observance that falls on the same Hijri month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IslamicEvent {
    pub hijri_month: u32,
    pub hijri_day: u32,
    pub name: &'static str,
    pub name_arabic: &'static str,
    pub kind: EventKind,
}

impl IslamicEvent {
    pub fn is_major(&self) -> bool {
        self.kind == EventKind::Major
    }

    /// Returns true if this event falls on the given Hijri month and day.
    pub fn falls_on(&self, month: u32, day: u32) -> bool {
        self.hijri_month == month && self.hijri_day == day
    }
}

static EVENTS: [IslamicEvent; 9] = [
    IslamicEvent {
        hijri_month: 1,
        hijri_day: 1,
        name: "Islamic New Year",
        name_arabic: "رأس السنة الهجرية",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 1,
        hijri_day: 10,
        name: "Day of Ashura",
        name_arabic: "يوم عاشوراء",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 3,
        hijri_day: 12,
        name: "Mawlid an-Nabi",
        name_arabic: "المولد النبوي",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 7,
        hijri_day: 27,
        name: "Isra and Mi'raj",
        name_arabic: "الإسراء والمعراج",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 8,
        hijri_day: 15,
        name: "Laylat al-Bara'at",
        name_arabic: "ليلة البراءة",
        kind: EventKind::Minor,
    },
    IslamicEvent {
        hijri_month: 9,
        hijri_day: 1,
        name: "Start of Ramadan",
        name_arabic: "بداية رمضان",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 9,
        hijri_day: 27,
        name: "Laylat al-Qadr",
        name_arabic: "ليلة القدر",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 10,
        hijri_day: 1,
        name: "Eid al-Fitr",
        name_arabic: "عيد الفطر",
        kind: EventKind::Major,
    },
    IslamicEvent {
        hijri_month: 12,
        hijri_day: 10,
        name: "Eid al-Adha",
        name_arabic: "عيد الأضحى",
        kind: EventKind::Major,
    },
];

/// Every event in the catalog, in declaration order.
pub fn all() -> &'static [IslamicEvent] {
    &EVENTS
}

/// Events falling on the given Hijri month and day.
///
/// Usually zero or one event matches. No validation is done: a month or
/// day outside the calendar returns an empty list.
pub fn lookup(month: u32, day: u32) -> Vec<&'static IslamicEvent> {
    EVENTS.iter().filter(|event| event.falls_on(month, day)).collect()
}

/// Events in the given Hijri month, ordered as declared.
pub fn events_in_month(month: u32) -> impl Iterator<Item = &'static IslamicEvent> {
    EVENTS.iter().filter(move |event| event.hijri_month == month)
}

/// Events on the Hijri date corresponding to a Gregorian date.
pub fn events_on(date: GregorianDate) -> Vec<&'static IslamicEvent> {
    let hijri = to_hijri(date);
    lookup(hijri.month(), hijri.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_by_date() {
        let keys: Vec<(u32, u32)> = all().iter().map(|e| (e.hijri_month, e.hijri_day)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_only_one_minor_event() {
        let minor: Vec<_> = all().iter().filter(|e| !e.is_major()).collect();
        assert_eq!(minor.len(), 1);
        assert_eq!(minor[0].name, "Laylat al-Bara'at");
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(lookup(0, 1).is_empty());
        assert!(lookup(13, 1).is_empty());
        assert!(lookup(1, 0).is_empty());
        assert!(lookup(1, 31).is_empty());
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(EventKind::Major.label(), "Major Event");
        assert_eq!(EventKind::Minor.label(), "Minor Event");
    }
}
