//! Calendar events built from courses.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::course::Course;
use crate::faculty::FacultyDirectory;
use crate::weekday::Weekday;
use crate::zone::LocalZone;

/// Weekly repetition of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    /// Days the event repeats on, in the order the schedule listed them
    pub days: Vec<Weekday>,
    /// Local instant on or after the last occurrence
    pub until: DateTime<FixedOffset>,
}

/// One calendar event, ready to be serialized.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub summary: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub recurrence: Option<Recurrence>,
    /// TZID the local start/end times are expressed in
    pub tzid: &'static str,
    pub uid: String,
    /// DTSTAMP
    pub created: DateTime<Utc>,
}

/// Generate a UID of the form `<uuid>@<first four chars>.org`.
pub fn generate_uid() -> String {
    let uid = Uuid::new_v4().to_string();
    format!("{uid}@{}.org", &uid[..4])
}

/// Turns courses into events.
#[derive(Debug, Clone, Copy)]
pub struct EventBuilder<'a> {
    zone: LocalZone,
    faculty: Option<&'a FacultyDirectory>,
    align_first_occurrence: bool,
}

impl<'a> EventBuilder<'a> {
    pub fn new(zone: LocalZone) -> Self {
        EventBuilder {
            zone,
            faculty: None,
            align_first_occurrence: false,
        }
    }

    /// Resolve instructor position titles through a faculty directory.
    pub fn with_faculty(mut self, faculty: &'a FacultyDirectory) -> Self {
        self.faculty = Some(faculty);
        self
    }

    /// Move the first occurrence to the first meeting day on or after the
    /// term's first day of classes.
    ///
    /// Off by default: the first occurrence is anchored on the first day of
    /// classes even when the course doesn't meet that day.
    pub fn align_first_occurrence(mut self, align: bool) -> Self {
        self.align_first_occurrence = align;
        self
    }

    /// Zone every event's local times are expressed in.
    pub fn zone(&self) -> LocalZone {
        self.zone
    }

    pub fn build(&self, course: &Course) -> CalendarEvent {
        self.build_at(course, Utc::now())
    }

    /// Build an event using `now` as its creation timestamp.
    pub fn build_at(&self, course: &Course, now: DateTime<Utc>) -> CalendarEvent {
        let term = &course.term;
        let first_day = term.first_day_of_classes;

        let (start, end, recurrence) = match course.meetings {
            Some(ref meetings) => {
                let anchor = if self.align_first_occurrence {
                    first_meeting_day(first_day, &meetings.days)
                } else {
                    first_day
                };
                let start = self.zone.at(anchor, meetings.start);
                let end = self.zone.at(anchor, meetings.end);
                let until = self.zone.at(term.last_day_of_classes, meetings.end);

                let recurrence = Recurrence {
                    days: meetings.days.clone(),
                    until,
                };
                (start, end, Some(recurrence))
            }
            None => {
                warn!(
                    course = %course.name,
                    "Course has no scheduled meetings, adding a single event on the first day of classes"
                );
                let start = self.zone.at(first_day, NaiveTime::MIN);
                (start, start, None)
            }
        };

        let position = self
            .faculty
            .and_then(|faculty| faculty.position_of(&course.instructor.name));
        let description = Some(course.description_text(position)).filter(|d| !d.is_empty());

        let event = CalendarEvent {
            summary: course.name.clone(),
            location: course.room.clone(),
            description,
            start,
            end,
            recurrence,
            tzid: self.zone.tzid,
            uid: generate_uid(),
            created: now,
        };

        debug!(
            summary = %event.summary,
            start = %event.start,
            recurring = event.recurrence.is_some(),
            "Built event"
        );
        event
    }
}

/// First date on or after `from` that falls on one of `days`.
fn first_meeting_day(from: NaiveDate, days: &[Weekday]) -> NaiveDate {
    (0..7)
        .map(|offset| from + Duration::days(offset))
        .find(|date| {
            days.iter()
                .any(|day| chrono::Weekday::from(*day) == date.weekday())
        })
        .unwrap_or(from)
}
