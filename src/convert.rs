use anyhow::{Context, Result};
use coursecal_core::{Calendar, Course, EventBuilder, FacultyDirectory, PACIFIC, ScheduleExport};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::config::Config;
use crate::render::Render;

/// Read the schedule export, build the calendar and write it out.
pub fn run(cfg: &Config) -> Result<()> {
    let courses = load_courses(&cfg.input)?;

    let faculty = match cfg.faculty {
        Some(ref path) => Some(
            FacultyDirectory::from_path(path)
                .with_context(|| format!("Failed to load faculty directory {}", path.display()))?,
        ),
        None => None,
    };

    let mut builder = EventBuilder::new(PACIFIC).align_first_occurrence(cfg.align_first_occurrence);
    if let Some(ref faculty) = faculty {
        builder = builder.with_faculty(faculty);
    }

    let calendar = Calendar::from_courses(&courses, &builder);
    write_calendar(&calendar, &cfg.output)?;

    for course in &courses {
        println!("   {}", course.render());
    }
    println!(
        "\nWrote {} {} to {}",
        calendar.len(),
        if calendar.len() == 1 { "event" } else { "events" },
        cfg.output.display().green()
    );

    Ok(())
}

fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule export {}", path.display()))?;

    let export = ScheduleExport::from_json(&contents)
        .with_context(|| format!("Failed to parse schedule export {}", path.display()))?;

    export
        .into_courses()
        .with_context(|| format!("Invalid course data in {}", path.display()))
}

fn write_calendar(calendar: &Calendar, path: &Path) -> Result<()> {
    std::fs::write(path, calendar.serialize())
        .with_context(|| format!("Failed to write calendar to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "terms": [{
            "caption": "WINTER TERM 2024",
            "rows": [
                {"DATE": "January 8", "DAY": "Monday", "DSCR": "Classes begin"},
                {"DATE": "March 15", "DAY": "Friday", "DSCR": "Last day of classes"}
            ]
        }],
        "courses": [
            {
                "term": "WINTER TERM 2024",
                "name": "CSC 357-01",
                "description": "Systems programming",
                "meetings": "MWF 10:00 AM to 10:50 AM",
                "room": "014-0256",
                "instructor": {"Professor's name": "Jane Doe", "Email": "jdoe@calpoly.edu"}
            },
            {
                "term": "WINTER TERM 2024",
                "name": "CSC 400-01",
                "meetings": "Unknown",
                "instructor": {"Professor's name": "John Smith", "Email": "js@calpoly.edu"}
            }
        ]
    }"#;

    #[test]
    fn test_run_writes_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("my_classes.json");
        let faculty = dir.path().join("faculty.csv");
        let output = dir.path().join("calendar.ics");
        std::fs::write(&input, EXPORT).unwrap();
        std::fs::write(&faculty, ",NAME,POSITION\n0,Jane Doe,Lecturer\n").unwrap();

        let cfg = Config {
            input,
            output: output.clone(),
            faculty: Some(faculty),
            align_first_occurrence: false,
        };
        run(&cfg).unwrap();

        let ics = std::fs::read_to_string(&output).unwrap();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR"));
        let events: Vec<&str> = ics.split("BEGIN:VEVENT").skip(1).collect();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains("\r\nRRULE:FREQ=WEEKLY;WKST=SU;BYDAY=MO,WE,FR;"));
        assert!(!events[1].contains("RRULE:"));
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains("Instructor: Jane Doe\\, Lecturer"));
    }

    #[test]
    fn test_run_fails_on_bad_course() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("my_classes.json");
        let output = dir.path().join("calendar.ics");
        std::fs::write(&input, EXPORT.replace("MWF 10:00 AM", "MWF 10 AM")).unwrap();

        let cfg = Config {
            input,
            output: output.clone(),
            ..Config::default()
        };
        let err = run(&cfg).unwrap_err();

        assert!(format!("{err:#}").contains("Malformed meeting string"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            input: dir.path().join("missing.json"),
            ..Config::default()
        };

        let err = run(&cfg).unwrap_err();
        assert!(err.to_string().contains("Failed to read schedule export"));
    }
}
