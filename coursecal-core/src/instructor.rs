//! Instructor contact details from the schedule export.

use crate::error::{CourseCalError, CourseCalResult};

/// Which instructor field an export label fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InstructorField {
    Name,
    Email,
    OfficePhone,
    OfficeLocation,
}

/// Labels used by the export's instructor panel.
const FIELD_LABELS: [(&str, InstructorField); 4] = [
    ("Professor's name", InstructorField::Name),
    ("Email", InstructorField::Email),
    ("Office Phone", InstructorField::OfficePhone),
    ("Office Location", InstructorField::OfficeLocation),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub name: String,
    pub email: String,
    pub office_location: Option<String>,
    pub office_phone: Option<String>,
}

impl Instructor {
    /// Build an instructor from `(label, value)` pairs.
    ///
    /// Fails on any label outside the four the export uses, and when the
    /// name or email is missing.
    pub fn from_fields<I, K, V>(fields: I) -> CourseCalResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut email = None;
        let mut office_location = None;
        let mut office_phone = None;

        for (label, value) in fields {
            let label = label.as_ref();
            let field = FIELD_LABELS
                .iter()
                .find(|(known, _)| *known == label)
                .map(|(_, field)| *field)
                .ok_or_else(|| CourseCalError::UnrecognizedField(label.to_string()))?;

            let slot = match field {
                InstructorField::Name => &mut name,
                InstructorField::Email => &mut email,
                InstructorField::OfficePhone => &mut office_phone,
                InstructorField::OfficeLocation => &mut office_location,
            };
            let value: String = value.into();
            *slot = Some(value.trim().to_string());
        }

        Ok(Instructor {
            name: name
                .filter(|s| !s.is_empty())
                .ok_or(CourseCalError::MissingField("Professor's name"))?,
            email: email
                .filter(|s| !s.is_empty())
                .ok_or(CourseCalError::MissingField("Email"))?,
            office_location: office_location.filter(|s| !s.is_empty()),
            office_phone: office_phone.filter(|s| !s.is_empty()),
        })
    }

    /// Summary block for event descriptions, one entry per line.
    pub fn summary(&self, position: Option<&str>) -> Vec<String> {
        let mut lines = Vec::new();

        match position {
            Some(position) => lines.push(format!("Instructor: {}, {}", self.name, position)),
            None => lines.push(format!("Instructor: {}", self.name)),
        }
        lines.push(format!("Email: {}", self.email));
        if let Some(ref location) = self.office_location {
            lines.push(format!("Office: {location}"));
        }
        if let Some(ref phone) = self.office_phone {
            lines.push(format!("Phone: {phone}"));
        }

        lines
    }
}
