//! Parsing of free-text meeting descriptions like `MWF 10:00 AM to 10:50 AM`.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::error::{CourseCalError, CourseCalResult};
use crate::weekday::Weekday;

/// Token marking a course without a regularly scheduled meeting.
const NO_MEETINGS_SENTINEL: &str = "Unknown";

static MEETING_RGX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<days>\w+) (?P<start>\d{1,2}:\d\d) (?P<start_meridiem>[AaPp][Mm]) to (?P<end>\d{1,2}:\d\d) (?P<end_meridiem>[AaPp][Mm])",
    )
    .expect("valid meeting regex")
});

/// When a course meets during the week.
///
/// Times of day are wall-clock times in the calendar's local zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meetings {
    pub days: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Meetings {
    /// Parse a meeting description.
    ///
    /// Returns `Ok(None)` for courses without a fixed time (the export writes
    /// `Unknown` for those, e.g. independent study).
    pub fn parse(text: &str) -> CourseCalResult<Option<Meetings>> {
        if text.contains(NO_MEETINGS_SENTINEL) {
            return Ok(None);
        }

        let malformed = || CourseCalError::MalformedMeetingString(text.to_string());
        let caps = MEETING_RGX.captures(text.trim()).ok_or_else(malformed)?;

        let days = Weekday::decode_all(&caps["days"])?;
        let start = parse_clock_time(&caps["start"], &caps["start_meridiem"]).ok_or_else(malformed)?;
        let end = parse_clock_time(&caps["end"], &caps["end_meridiem"]).ok_or_else(malformed)?;

        Ok(Some(Meetings { days, start, end }))
    }
}

/// Interpret `HH:MM` on a 12-hour clock.
fn parse_clock_time(hhmm: &str, meridiem: &str) -> Option<NaiveTime> {
    let (hour, minute) = hhmm.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let pm = meridiem.eq_ignore_ascii_case("PM");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

impl std::fmt::Display for Meetings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days: String = self.days.iter().map(|d| d.letter_code()).collect();
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            days,
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}
