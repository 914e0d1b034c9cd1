//! A calendar of course events.

use std::fmt;

use crate::course::Course;
use crate::event::{CalendarEvent, EventBuilder};
use crate::ics::generate_ics;
use crate::zone::LocalZone;

pub const PRODID: &str = "-//coursecal//Course Schedule//EN";

/// Ordered events plus the fixed calendar metadata.
#[derive(Debug, Clone)]
pub struct Calendar {
    pub events: Vec<CalendarEvent>,
    pub prodid: String,
    pub version: &'static str,
    pub calscale: &'static str,
    /// Zone whose VTIMEZONE block is embedded
    pub zone: LocalZone,
}

impl Calendar {
    pub fn new(events: Vec<CalendarEvent>, zone: LocalZone) -> Self {
        Calendar {
            events,
            prodid: PRODID.to_string(),
            version: "2.0",
            calscale: "GREGORIAN",
            zone,
        }
    }

    /// One event per course, in course order, in the builder's zone.
    pub fn from_courses(courses: &[Course], builder: &EventBuilder<'_>) -> Self {
        let events = courses.iter().map(|course| builder.build(course)).collect();
        Calendar::new(events, builder.zone())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render as .ics text.
    pub fn serialize(&self) -> String {
        generate_ics(self)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::tests::{record, winter_2024};
    use crate::ics::CRLF;
    use crate::zone::PACIFIC;

    #[test]
    fn test_two_course_calendar() {
        let term = winter_2024();
        let courses = vec![
            Course::from_record(record("CSC 357-01", "MWF 10:00 AM to 10:50 AM"), term.clone())
                .unwrap(),
            Course::from_record(record("CSC 400-01", "Unknown"), term).unwrap(),
        ];

        let calendar = Calendar::from_courses(&courses, &EventBuilder::new(PACIFIC));
        assert_eq!(calendar.len(), 2);
        assert_eq!(calendar.zone, PACIFIC);

        let ics = calendar.to_string();
        let blocks: Vec<&str> = ics
            .split("BEGIN:VEVENT")
            .skip(1)
            .map(|b| b.split("END:VEVENT").next().unwrap())
            .collect();
        assert_eq!(blocks.len(), 2);

        assert!(blocks[0].contains("SUMMARY:CSC 357-01"));
        assert!(blocks[0].contains(&format!(
            "{CRLF}RRULE:FREQ=WEEKLY;WKST=SU;BYDAY=MO,WE,FR;UNTIL=20240315T105000{CRLF}"
        )));
        assert!(blocks[0].contains("DTSTART;TZID=America/Los_Angeles:20240108T100000"));
        assert!(blocks[0].contains("DTEND;TZID=America/Los_Angeles:20240108T105000"));

        assert!(blocks[1].contains("SUMMARY:CSC 400-01"));
        assert!(!blocks[1].contains("RRULE"));
        assert_eq!(blocks[1].matches("DTSTART").count(), 1);
        assert_eq!(blocks[1].matches("DTEND").count(), 1);
        assert!(blocks[1].contains("DTSTART;TZID=America/Los_Angeles:20240108T000000"));
        assert!(blocks[1].contains("DTEND;TZID=America/Los_Angeles:20240108T000000"));
    }

    #[test]
    fn test_empty_calendar() {
        let calendar = Calendar::new(Vec::new(), PACIFIC);
        assert!(calendar.is_empty());

        let ics = calendar.serialize();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VTIMEZONE\r\nEND:VCALENDAR"));
        assert!(!ics.contains("VEVENT"));
    }
}
