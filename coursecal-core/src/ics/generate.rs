//! ICS generation for course events and calendars.

use chrono::{DateTime, FixedOffset, Utc};

use super::content_line::{CRLF, ContentLine, content_block};
use crate::calendar::Calendar;
use crate::event::{CalendarEvent, Recurrence};

/// Local date-time form used by DTSTART/DTEND/UNTIL (no `Z`, no offset).
pub fn format_local(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// UTC date-time form used by DTSTAMP.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// RRULE value: `FREQ=WEEKLY;WKST=SU;BYDAY=..;UNTIL=..`
pub fn format_rrule(recurrence: &Recurrence) -> String {
    let byday = recurrence
        .days
        .iter()
        .map(|d| d.ics_code())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "FREQ=WEEKLY;WKST=SU;BYDAY={};UNTIL={}",
        byday,
        format_local(&recurrence.until)
    )
}

/// Render one VEVENT block.
///
/// Properties come out in a fixed order: SUMMARY, LOCATION, DESCRIPTION,
/// RRULE, DTSTART, DTEND, DTSTAMP, UID.
pub fn generate_event(event: &CalendarEvent) -> String {
    let zoned = |name: &str, dt: &DateTime<FixedOffset>| {
        ContentLine::raw(name, format_local(dt))
            .param("TZID", event.tzid)
            .render()
    };

    let lines = [
        Some(ContentLine::text("SUMMARY", &event.summary).render()),
        event
            .location
            .as_deref()
            .map(|loc| ContentLine::text("LOCATION", loc).render()),
        event
            .description
            .as_deref()
            .map(|desc| ContentLine::text("DESCRIPTION", desc.trim()).render()),
        event
            .recurrence
            .as_ref()
            .map(|r| ContentLine::raw("RRULE", format_rrule(r)).render()),
        Some(zoned("DTSTART", &event.start)),
        Some(zoned("DTEND", &event.end)),
        Some(ContentLine::raw("DTSTAMP", format_utc(&event.created)).render()),
        Some(ContentLine::raw("UID", event.uid.as_str()).render()),
    ];

    content_block("VEVENT", lines)
}

/// Render the whole VCALENDAR. The output has no trailing line break.
pub fn generate_ics(calendar: &Calendar) -> String {
    let vtimezone = calendar
        .zone
        .vtimezone_lines()
        .collect::<Vec<_>>()
        .join(CRLF);

    let header = [
        Some(ContentLine::text("PRODID", &calendar.prodid).render()),
        Some(ContentLine::raw("VERSION", calendar.version).render()),
        Some(ContentLine::raw("CALSCALE", calendar.calscale).render()),
        Some(vtimezone),
    ];
    let events = calendar.events.iter().map(|e| Some(generate_event(e)));

    content_block("VCALENDAR", header.into_iter().chain(events))
}
