//! Faculty directory lookup (instructor name -> position title).

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CourseCalError, CourseCalResult};

const NAME_COLUMN: &str = "NAME";
const POSITION_COLUMN: &str = "POSITION";

#[derive(Debug, Clone, PartialEq, Eq)]
struct FacultyEntry {
    name: String,
    position: String,
}

/// Faculty directory table, as published in the university catalog.
#[derive(Debug, Clone, Default)]
pub struct FacultyDirectory {
    entries: Vec<FacultyEntry>,
}

impl FacultyDirectory {
    /// Read a CSV export with `NAME` and `POSITION` columns. Other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> CourseCalResult<Self> {
        let mut csv = csv::Reader::from_reader(reader);

        let headers = csv.headers()?.clone();
        let column = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim() == wanted)
                .ok_or_else(|| CourseCalError::FacultyDirectory(format!("missing {wanted} column")))
        };
        let name_idx = column(NAME_COLUMN)?;
        let position_idx = column(POSITION_COLUMN)?;

        let mut entries = Vec::new();
        for record in csv.records() {
            let record = record?;
            let (Some(name), Some(position)) = (record.get(name_idx), record.get(position_idx))
            else {
                continue;
            };
            entries.push(FacultyEntry {
                name: name.trim().to_string(),
                position: position.trim().to_string(),
            });
        }

        debug!(entries = entries.len(), "Loaded faculty directory");
        Ok(FacultyDirectory { entries })
    }

    pub fn from_path(path: &Path) -> CourseCalResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Position of the first directory entry whose name contains `name` (case-insensitive).
    pub fn position_of(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&needle))
            .map(|entry| entry.position.as_str())
            .filter(|position| !position.is_empty())
    }
}
