//! ICS output.
//!
//! Content-line grammar (escaping, folding, blocks) and rendering of course
//! events into a VCALENDAR. Only generation is supported.

mod content_line;
mod generate;

pub use content_line::{
    CRLF, ContentLine, LINE_LENGTH, content_block, escape_text, fold_line, unfold_line,
};
pub use generate::{format_local, format_rrule, format_utc, generate_event, generate_ics};
