//! Schedule export documents: term tables plus extracted course records.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::course::{Course, CourseRecord};
use crate::error::{CourseCalError, CourseCalResult};
use crate::term::{AcademicTerm, CalendarRow};

/// A term's calendar table as it appears in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTable {
    /// e.g. `WINTER TERM 2024`
    pub caption: String,
    pub rows: Vec<CalendarRow>,
}

/// A course record tagged with the caption of the term it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub term: String,
    #[serde(flatten)]
    pub record: CourseRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleExport {
    #[serde(default)]
    pub terms: Vec<TermTable>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

impl ScheduleExport {
    pub fn from_json(json: &str) -> CourseCalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every term once, then parse courses in export order.
    ///
    /// Stops at the first course that fails to parse.
    pub fn into_courses(self) -> CourseCalResult<Vec<Course>> {
        let mut terms: HashMap<String, Arc<AcademicTerm>> = HashMap::new();
        for table in &self.terms {
            let term = AcademicTerm::from_reference_table(&table.caption, &table.rows)?;
            terms.insert(table.caption.trim().to_string(), Arc::new(term));
        }
        debug!(terms = terms.len(), courses = self.courses.len(), "Resolved terms");

        self.courses
            .into_iter()
            .map(|entry| {
                let term = terms
                    .get(entry.term.trim())
                    .cloned()
                    .ok_or_else(|| CourseCalError::UnknownTerm(entry.term.clone()))?;
                Course::from_record(entry.record, term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "terms": [
            {
                "caption": "WINTER TERM 2024",
                "rows": [
                    {"DATE": "January 8", "DAY": "Monday", "DSCR": "Classes begin"},
                    {"DATE": "March 15", "DAY": "Friday", "DSCR": "Last day of classes"}
                ]
            },
            {
                "caption": "SPRING TERM 2024",
                "rows": [
                    {"date": "April 1", "day": "Monday", "dscr": "Spring classes begin"},
                    {"date": "June 7", "day": "Friday", "dscr": "Last day of classes"}
                ]
            }
        ],
        "courses": [
            {
                "term": "WINTER TERM 2024",
                "name": "CSC 357-01",
                "description": "Systems programming",
                "meetings": "TR 02:10 PM to 03:25 PM",
                "room": "014-0256",
                "units": "4",
                "instructor": {"Professor's name": "Jane Doe", "Email": "jdoe@calpoly.edu"}
            },
            {
                "term": "SPRING TERM 2024",
                "name": "CSC 400-01",
                "meetings": "Unknown",
                "instructor": {"Professor's name": "John Smith", "Email": "js@calpoly.edu"}
            }
        ]
    }"#;

    #[test]
    fn test_into_courses_shares_terms_and_keeps_order() {
        let courses = ScheduleExport::from_json(EXPORT)
            .unwrap()
            .into_courses()
            .unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].name, "CSC 357-01");
        assert_eq!(courses[0].term.label(), "winter 2024");
        assert!(courses[0].has_meetings());
        assert_eq!(courses[1].name, "CSC 400-01");
        assert_eq!(courses[1].term.label(), "spring 2024");
        assert!(!courses[1].has_meetings());
        assert_eq!(courses[1].room, None);
    }

    #[test]
    fn test_unknown_term() {
        let mut export = ScheduleExport::from_json(EXPORT).unwrap();
        export.courses[1].term = "SUMMER TERM 2024".to_string();

        let err = export.into_courses().unwrap_err();
        assert!(matches!(err, CourseCalError::UnknownTerm(ref t) if t == "SUMMER TERM 2024"));
    }

    #[test]
    fn test_bad_term_table_fails_before_courses() {
        let mut export = ScheduleExport::from_json(EXPORT).unwrap();
        export.terms[1].caption = "Spring 2024".to_string();

        let err = export.into_courses().unwrap_err();
        assert!(matches!(err, CourseCalError::MalformedTermCaption(_)));
    }

    #[test]
    fn test_demo_export() {
        let json = include_str!("../../demos/my_classes.json");
        let courses = ScheduleExport::from_json(json)
            .unwrap()
            .into_courses()
            .unwrap();

        let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CSC 357-01", "CSC 357-02", "CSC 400-01"]);
        assert_eq!(courses[1].units, Some(0));
        assert_eq!(courses[2].units, Some(2));
        assert!(!courses[2].has_meetings());
        assert!(courses.iter().all(|c| Arc::ptr_eq(&c.term, &courses[0].term)));
    }

    #[test]
    fn test_invalid_json() {
        let err = ScheduleExport::from_json("{\"courses\": 3}").unwrap_err();
        assert!(matches!(err, CourseCalError::Json(_)));
    }
}
