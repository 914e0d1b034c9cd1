//! Content lines and blocks: the line grammar of .ics files.

/// Line separator required by RFC 5545.
pub const CRLF: &str = "\r\n";

/// Maximum characters per physical line before folding.
pub const LINE_LENGTH: usize = 75;

/// Escape a TEXT value: backslash, semicolon, comma and line breaks.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\r' => {
                // CRLF collapses into a single escaped newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Fold a logical line into physical lines of at most [`LINE_LENGTH`] characters.
///
/// Continuation lines start with a single space. Folding counts characters, so
/// multi-byte characters are never split.
pub fn fold_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= LINE_LENGTH {
        return line.to_string();
    }

    chars
        .chunks(LINE_LENGTH)
        .enumerate()
        .map(|(i, chunk)| {
            let chunk: String = chunk.iter().collect();
            if i == 0 { chunk } else { format!(" {chunk}") }
        })
        .collect::<Vec<_>>()
        .join(CRLF)
}

/// Inverse of [`fold_line`].
pub fn unfold_line(folded: &str) -> String {
    folded.replace("\r\n ", "")
}

/// One `NAME[;PARAM=VALUE...]:VALUE` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    name: String,
    params: Vec<(String, String)>,
    value: String,
}

impl ContentLine {
    /// A line whose value is TEXT and gets escaped.
    pub fn text(name: &str, value: &str) -> Self {
        Self::raw(name, escape_text(value))
    }

    /// A line whose value is already in its serialized form (dates, recurrence rules).
    pub fn raw(name: &str, value: impl Into<String>) -> Self {
        ContentLine {
            name: name.to_string(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// The unfolded logical line.
    pub fn logical(&self) -> String {
        let mut line = self.name.clone();
        for (name, value) in &self.params {
            line.push(';');
            line.push_str(name);
            line.push('=');
            line.push_str(value);
        }
        line.push(':');
        line.push_str(&self.value);
        line
    }

    /// The folded line, ready to be written.
    pub fn render(&self) -> String {
        fold_line(&self.logical())
    }
}

/// Render a `BEGIN:<KIND>` ... `END:<KIND>` block. `None` entries are skipped.
///
/// Entries are already-rendered lines or nested blocks.
pub fn content_block<I>(kind: &str, entries: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let begin = ContentLine::raw("BEGIN", kind).render();
    let end = ContentLine::raw("END", kind).render();

    std::iter::once(begin)
        .chain(entries.into_iter().flatten())
        .chain(std::iter::once(end))
        .collect::<Vec<_>>()
        .join(CRLF)
}
