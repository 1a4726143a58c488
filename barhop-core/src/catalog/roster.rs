//! The built-in Lubbock roster.
//!
//! Sunday to Thursday share one window; Friday and Saturday stay open later
//! at most venues.

use crate::{OpeningHours, Venue, WeeklySchedule};

struct Entry {
    name: &'static str,
    capacity: u32,
    popularity: u8,
    base_wait_minutes: u32,
    weeknight: (u32, u32),
    weekend: (u32, u32),
}

const ROSTER: [Entry; 10] = [
    Entry {
        name: "Chimy's",
        capacity: 200,
        popularity: 5,
        base_wait_minutes: 15,
        weeknight: (17, 2),
        weekend: (17, 2),
    },
    Entry {
        name: "Cricket's",
        capacity: 150,
        popularity: 4,
        base_wait_minutes: 10,
        weeknight: (18, 2),
        weekend: (18, 2),
    },
    Entry {
        name: "Bier Haus",
        capacity: 120,
        popularity: 4,
        base_wait_minutes: 8,
        weeknight: (17, 1),
        weekend: (17, 2),
    },
    Entry {
        name: "Logie's",
        capacity: 100,
        popularity: 3,
        base_wait_minutes: 5,
        weeknight: (18, 1),
        weekend: (18, 2),
    },
    Entry {
        name: "Atomic",
        capacity: 80,
        popularity: 3,
        base_wait_minutes: 5,
        weeknight: (19, 2),
        weekend: (19, 2),
    },
    Entry {
        name: "Bar PM",
        capacity: 100,
        popularity: 3,
        base_wait_minutes: 7,
        weeknight: (20, 2),
        weekend: (20, 2),
    },
    Entry {
        name: "Wrecked",
        capacity: 90,
        popularity: 2,
        base_wait_minutes: 3,
        weeknight: (18, 1),
        weekend: (18, 2),
    },
    Entry {
        name: "Miguel's",
        capacity: 110,
        popularity: 3,
        base_wait_minutes: 6,
        weeknight: (17, 0),
        weekend: (17, 1),
    },
    Entry {
        name: "Crafthouse",
        capacity: 130,
        popularity: 4,
        base_wait_minutes: 10,
        weeknight: (16, 0),
        weekend: (16, 1),
    },
    Entry {
        name: "Bikini's",
        capacity: 85,
        popularity: 2,
        base_wait_minutes: 4,
        weeknight: (18, 1),
        weekend: (18, 2),
    },
];

pub(super) fn venues() -> Vec<Venue> {
    ROSTER
        .iter()
        .map(|entry| {
            let (weeknight_open, weeknight_close) = entry.weeknight;
            let (weekend_open, weekend_close) = entry.weekend;
            Venue::new(
                entry.name,
                entry.capacity,
                entry.popularity,
                entry.base_wait_minutes,
                WeeklySchedule::with_weekend(
                    OpeningHours::from_hours(weeknight_open, weeknight_close),
                    OpeningHours::from_hours(weekend_open, weekend_close),
                ),
            )
        })
        .collect()
}
