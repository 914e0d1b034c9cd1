//! Weekday codes used by schedule exports and by RRULE BYDAY lists.

use crate::error::{CourseCalError, CourseCalResult};

/// Day of the week, Monday first (ordinal 0-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Mon = 0,
    Tues = 1,
    Wed = 2,
    Thurs = 3,
    Fri = 4,
    Sat = 5,
    Sun = 6,
}

/// Input codes, two-letter codes first so the scanner tries them before single letters.
const LETTER_CODES: [(&str, Weekday); 7] = [
    ("Sa", Weekday::Sat),
    ("Sn", Weekday::Sun),
    ("M", Weekday::Mon),
    ("T", Weekday::Tues),
    ("W", Weekday::Wed),
    ("R", Weekday::Thurs),
    ("F", Weekday::Fri),
];

impl Weekday {
    /// Decode a single schedule-export day code (`M`, `T`, `W`, `R`, `F`, `Sa`, `Sn`).
    pub fn decode(code: &str) -> CourseCalResult<Weekday> {
        LETTER_CODES
            .iter()
            .find(|(letters, _)| *letters == code)
            .map(|(_, day)| *day)
            .ok_or_else(|| CourseCalError::UnknownDayCode(code.to_string()))
    }

    /// Decode a run of concatenated day codes such as `MWF` or `TRSa`.
    ///
    /// Order and duplicates are preserved.
    pub fn decode_all(codes: &str) -> CourseCalResult<Vec<Weekday>> {
        let mut days = Vec::new();
        let mut rest = codes;

        while !rest.is_empty() {
            let (letters, day) = LETTER_CODES
                .iter()
                .find(|(letters, _)| rest.starts_with(*letters))
                .ok_or_else(|| {
                    let bad: String = rest.chars().take(1).collect();
                    CourseCalError::UnknownDayCode(bad)
                })?;
            days.push(*day);
            rest = &rest[letters.len()..];
        }

        Ok(days)
    }

    /// The schedule-export code for this day (inverse of [`Weekday::decode`]).
    pub fn letter_code(self) -> &'static str {
        match self {
            Weekday::Mon => "M",
            Weekday::Tues => "T",
            Weekday::Wed => "W",
            Weekday::Thurs => "R",
            Weekday::Fri => "F",
            Weekday::Sat => "Sa",
            Weekday::Sun => "Sn",
        }
    }

    /// Two-letter iCalendar code (`MO`, `TU`, ...).
    pub fn ics_code(self) -> &'static str {
        match self {
            Weekday::Mon => "MO",
            Weekday::Tues => "TU",
            Weekday::Wed => "WE",
            Weekday::Thurs => "TH",
            Weekday::Fri => "FR",
            Weekday::Sat => "SA",
            Weekday::Sun => "SU",
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tues => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thurs => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
            Weekday::Sat => chrono::Weekday::Sat,
            Weekday::Sun => chrono::Weekday::Sun,
        }
    }
}
