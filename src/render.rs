//! Terminal rendering for coursecal-core types.

use coursecal_core::Course;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Course {
    fn render(&self) -> String {
        let when = match self.meetings {
            Some(ref meetings) => meetings.to_string(),
            None => format!("no scheduled meetings, {}", self.term.first_day_of_classes),
        };

        format!("📅 {} {}", self.name, when.dimmed())
    }
}
