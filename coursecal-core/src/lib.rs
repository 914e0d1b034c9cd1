//! Core types for coursecal.
//!
//! Turns a course-schedule export into an iCalendar file with one recurring
//! event per course:
//! - `meetings` and `weekday` parse meeting strings like `MWF 10:00 AM to 10:50 AM`
//! - `term` resolves first/last day of classes from a term calendar table
//! - `course`, `instructor` and `schedule` model the exported records
//! - `event` builds calendar events, `calendar` and `ics` render them

pub mod calendar;
pub mod course;
pub mod error;
pub mod event;
pub mod faculty;
pub mod ics;
pub mod instructor;
pub mod meetings;
pub mod schedule;
pub mod term;
pub mod weekday;
pub mod zone;

pub use calendar::Calendar;
pub use course::{Course, CourseRecord};
pub use error::{CourseCalError, CourseCalResult};
pub use event::{CalendarEvent, EventBuilder, Recurrence};
pub use faculty::FacultyDirectory;
pub use instructor::Instructor;
pub use meetings::Meetings;
pub use schedule::ScheduleExport;
pub use term::{AcademicTerm, CalendarRow};
pub use weekday::Weekday;
pub use zone::{LocalZone, PACIFIC};
