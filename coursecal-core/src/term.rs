//! Academic term calendars: first and last day of instruction for a term.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CourseCalError, CourseCalResult};

static CAPTION_RGX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<term>[A-Za-z]+)\s+TERM\s+(?P<year>\d{4})\s*$").expect("valid caption regex")
});

static MONTH_DAY_RGX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<month>[A-Za-z]{3,9})\.?\s+(?P<day>\d{1,2})\b").expect("valid month/day regex")
});

const CLASSES_BEGIN: &str = "classes begin";
const LAST_DAY_OF_CLASSES: &str = "last day of classes";

/// One row of a term calendar table (DATE / DAY / DSCR columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRow {
    /// Month and day without a year, e.g. `January 8`
    #[serde(alias = "DATE")]
    pub date: String,
    #[serde(alias = "DAY", default)]
    pub day: String,
    #[serde(alias = "DSCR")]
    pub dscr: String,
}

impl CalendarRow {
    pub fn new(date: &str, day: &str, dscr: &str) -> Self {
        CalendarRow {
            date: date.to_string(),
            day: day.to_string(),
            dscr: dscr.to_string(),
        }
    }
}

/// An academic term (e.g. winter 2024) and its instruction dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicTerm {
    /// Lowercased term name, e.g. `winter`
    pub name: String,
    pub year: i32,
    pub first_day_of_classes: NaiveDate,
    pub last_day_of_classes: NaiveDate,
}

impl AcademicTerm {
    /// Build a term from its calendar table.
    ///
    /// `caption` must look like `WINTER TERM 2024`. The table must contain a
    /// row mentioning "classes begin" and one mentioning "Last day of classes".
    pub fn from_reference_table(caption: &str, rows: &[CalendarRow]) -> CourseCalResult<Self> {
        let (name, year) = parse_caption(caption)?;
        let label = format!("{name} {year}");

        let first_day_of_classes = find_class_date(rows, CLASSES_BEGIN, year, &label)?;
        let last_day_of_classes = find_class_date(rows, LAST_DAY_OF_CLASSES, year, &label)?;

        debug!(
            term = %label,
            first = %first_day_of_classes,
            last = %last_day_of_classes,
            "Resolved term calendar"
        );

        Ok(AcademicTerm {
            name,
            year,
            first_day_of_classes,
            last_day_of_classes,
        })
    }

    /// Human-readable label, e.g. `winter 2024`
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.year)
    }
}

fn parse_caption(caption: &str) -> CourseCalResult<(String, i32)> {
    let malformed = || CourseCalError::MalformedTermCaption(caption.to_string());
    let caps = CAPTION_RGX.captures(caption).ok_or_else(malformed)?;
    let year = caps["year"].parse().map_err(|_| malformed())?;
    Ok((caps["term"].to_lowercase(), year))
}

/// Find the first row whose description contains `needle` and date it in `year`.
fn find_class_date(
    rows: &[CalendarRow],
    needle: &'static str,
    year: i32,
    term_label: &str,
) -> CourseCalResult<NaiveDate> {
    let row = rows
        .iter()
        .find(|row| row.dscr.to_lowercase().contains(needle))
        .ok_or_else(|| CourseCalError::MissingCalendarRow {
            term: term_label.to_string(),
            needle,
        })?;

    parse_month_day(&row.date, year).ok_or_else(|| CourseCalError::AmbiguousCalendarRow {
        description: row.dscr.clone(),
        date: row.date.clone(),
    })
}

/// Parse a `Month Day` cell. The cell must hold exactly one such token.
fn parse_month_day(cell: &str, year: i32) -> Option<NaiveDate> {
    let mut matches = MONTH_DAY_RGX.captures_iter(cell);
    let caps = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    let text = format!("{} {} {}", &caps["month"], &caps["day"], year);
    NaiveDate::parse_from_str(&text, "%B %d %Y").ok()
}
