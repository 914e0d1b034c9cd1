//! Parsed courses.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CourseCalError, CourseCalResult};
use crate::instructor::Instructor;
use crate::meetings::Meetings;
use crate::term::AcademicTerm;

/// One course as extracted from the schedule export, all fields still plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Meeting text such as `MWF 10:00 AM to 10:50 AM`, or one containing `Unknown`
    pub meetings: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    /// Instructor panel, keyed by the export's field labels
    #[serde(default)]
    pub instructor: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub name: String,
    pub description: String,
    pub instructor: Instructor,
    pub title: Option<String>,
    pub room: Option<String>,
    pub units: Option<u8>,
    pub meetings: Option<Meetings>,
    pub term: Arc<AcademicTerm>,
}

impl Course {
    pub fn from_record(record: CourseRecord, term: Arc<AcademicTerm>) -> CourseCalResult<Self> {
        let meetings = Meetings::parse(&record.meetings)?;
        let instructor = Instructor::from_fields(record.instructor)?;
        let units = record.units.as_deref().map(parse_units).transpose()?.flatten();

        let course = Course {
            name: record.name.trim().to_string(),
            description: record.description.trim().to_string(),
            instructor,
            title: non_blank(record.title),
            room: non_blank(record.room),
            units,
            meetings,
            term,
        };

        debug!(
            course = %course.name,
            term = %course.term.label(),
            meetings = ?course.meetings.as_ref().map(ToString::to_string),
            "Parsed course"
        );
        Ok(course)
    }

    pub fn has_meetings(&self) -> bool {
        self.meetings.is_some()
    }

    /// Event description: title, course description, units and the instructor block.
    pub fn description_text(&self, position: Option<&str>) -> String {
        let mut lines = Vec::new();

        if let Some(ref title) = self.title {
            lines.push(title.clone());
        }
        if !self.description.is_empty() {
            lines.push(self.description.clone());
        }
        if let Some(units) = self.units {
            lines.push(format!("Units: {units}"));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(self.instructor.summary(position));

        lines.join("\n").trim().to_string()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `"4"`, `"4 units"` -> `Some(4)`; blank -> `None`.
fn parse_units(text: &str) -> CourseCalResult<Option<u8>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    let rest = text[digits.len()..].trim().to_lowercase();
    if !(rest.is_empty() || rest == "unit" || rest == "units") {
        return Err(CourseCalError::MalformedUnits(text.to_string()));
    }

    digits
        .parse()
        .map(Some)
        .map_err(|_| CourseCalError::MalformedUnits(text.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::term::CalendarRow;
    use crate::weekday::Weekday;

    pub(crate) fn winter_2024() -> Arc<AcademicTerm> {
        let rows = vec![
            CalendarRow::new("January 8", "Monday", "Classes begin"),
            CalendarRow::new("March 15", "Friday", "Last day of classes"),
        ];
        Arc::new(AcademicTerm::from_reference_table("WINTER TERM 2024", &rows).unwrap())
    }

    pub(crate) fn record(name: &str, meetings: &str) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            description: "Systems programming in C on Unix.".to_string(),
            meetings: meetings.to_string(),
            title: Some("Systems Programming".to_string()),
            room: Some("014-0256".to_string()),
            units: Some("4".to_string()),
            instructor: BTreeMap::from([
                ("Professor's name".to_string(), "Jane Doe".to_string()),
                ("Email".to_string(), "jdoe@calpoly.edu".to_string()),
                ("Office Location".to_string(), "014-0210".to_string()),
            ]),
        }
    }

    #[test]
    fn test_from_record() {
        let term = winter_2024();
        let course =
            Course::from_record(record("CSC 357-01", "TR 02:10 PM to 03:25 PM"), term.clone())
                .unwrap();

        assert_eq!(course.name, "CSC 357-01");
        assert_eq!(course.units, Some(4));
        assert_eq!(course.room.as_deref(), Some("014-0256"));
        assert_eq!(course.instructor.name, "Jane Doe");
        assert!(course.has_meetings());
        assert_eq!(
            course.meetings.as_ref().unwrap().days,
            vec![Weekday::Tues, Weekday::Thurs]
        );
        assert!(Arc::ptr_eq(&course.term, &term));
    }

    #[test]
    fn test_unknown_meetings() {
        let course =
            Course::from_record(record("CSC 400-01", "Unknown"), winter_2024()).unwrap();
        assert!(!course.has_meetings());
    }

    #[test]
    fn test_errors_propagate() {
        let err = Course::from_record(record("X", "MWF ten to eleven"), winter_2024())
            .unwrap_err();
        assert!(matches!(err, CourseCalError::MalformedMeetingString(_)));

        let mut rec = record("X", "Unknown");
        rec.instructor.insert("Website".to_string(), "example.com".to_string());
        let err = Course::from_record(rec, winter_2024()).unwrap_err();
        assert!(matches!(err, CourseCalError::UnrecognizedField(ref l) if l == "Website"));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("4").unwrap(), Some(4));
        assert_eq!(parse_units(" 2 units ").unwrap(), Some(2));
        assert_eq!(parse_units("1 Unit").unwrap(), Some(1));
        assert_eq!(parse_units("").unwrap(), None);
        assert!(matches!(
            parse_units("four"),
            Err(CourseCalError::MalformedUnits(ref t)) if t == "four"
        ));
        assert!(parse_units("4 credits").is_err());
    }

    #[test]
    fn test_description_text() {
        let course =
            Course::from_record(record("CSC 357-01", "Unknown"), winter_2024()).unwrap();

        assert_eq!(
            course.description_text(Some("Lecturer")),
            "Systems Programming\n\
             Systems programming in C on Unix.\n\
             Units: 4\n\
             \n\
             Instructor: Jane Doe, Lecturer\n\
             Email: jdoe@calpoly.edu\n\
             Office: 014-0210"
        );
    }

    #[test]
    fn test_description_text_without_course_details() {
        let mut rec = record("CSC 357-01", "Unknown");
        rec.title = None;
        rec.description = String::new();
        rec.units = None;
        let course = Course::from_record(rec, winter_2024()).unwrap();

        assert_eq!(
            course.description_text(None),
            "Instructor: Jane Doe\nEmail: jdoe@calpoly.edu\nOffice: 014-0210"
        );
    }
}
