//! Error types for the coursecal pipeline.

use thiserror::Error;

/// Errors that can occur while turning a schedule export into a calendar.
///
/// Every variant describes a shape violation in the input; none of them are
/// transient, so callers should report and stop rather than retry.
#[derive(Error, Debug)]
pub enum CourseCalError {
    #[error("Unknown day code '{0}'")]
    UnknownDayCode(String),

    #[error("Malformed meeting string: '{0}'")]
    MalformedMeetingString(String),

    #[error("Malformed term caption: '{0}' (expected '<TERM> TERM <YYYY>')")]
    MalformedTermCaption(String),

    #[error("No row containing '{needle}' in the calendar for {term}")]
    MissingCalendarRow { term: String, needle: &'static str },

    #[error("Calendar row '{description}' has an ambiguous date '{date}'")]
    AmbiguousCalendarRow { description: String, date: String },

    #[error("Unrecognized instructor field '{0}'")]
    UnrecognizedField(String),

    #[error("Missing required instructor field '{0}'")]
    MissingField(&'static str),

    #[error("Malformed unit count: '{0}'")]
    MalformedUnits(String),

    #[error("Course refers to unknown term '{0}'")]
    UnknownTerm(String),

    #[error("Faculty directory error: {0}")]
    FacultyDirectory(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for coursecal operations.
pub type CourseCalResult<T> = Result<T, CourseCalError>;
