//! Tagged-line filter — picks the `*%*` annotated lines out of a source.
//!
//! Module sources carry their help text inside a comment block:
//!
//! ```text
//! /*%*
//!  *%* DESCRIPTION
//!  *%*   This module captures video frames.
//!  *%*/
//! ```
//!
//! Only the substance of those lines survives: marker, inline `#` comments
//! and surrounding whitespace are stripped. A closing ` *%*/` only ends the
//! comment; the stream itself ends at an annotated sentinel line,
//! ` *%* *%*/`, or with the input.

/// Documentation marker token.
pub const MARKER: &str = "*%*";

/// End-of-annotation sentinel.
pub const SENTINEL: &str = "*%*/";

/// Inline comment delimiter inside annotated lines.
pub const COMMENT: char = '#';

/// The marker must start within this many leading characters.
const MARKER_WINDOW: usize = 4;

/// Lazy iterator over the content lines of a raw line stream.
pub struct TaggedLines<I> {
    lines: I,
    done: bool,
}

impl<I> TaggedLines<I> {
    pub fn new(lines: I) -> Self {
        Self { lines, done: false }
    }
}

/// Filter raw lines down to annotated content lines.
pub fn tagged_lines<I>(lines: I) -> TaggedLines<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TaggedLines::new(lines.into_iter())
}

/// Outcome of inspecting a single raw line.
#[derive(Debug, PartialEq, Eq)]
enum Tagged<'a> {
    Skip,
    End,
    Content(&'a str),
}

fn classify(raw: &str) -> Tagged<'_> {
    let line = raw.trim();
    // Closing line of a comment block, not the end of annotations.
    if line == SENTINEL {
        return Tagged::Skip;
    }

    let window_end = line
        .char_indices()
        .nth(MARKER_WINDOW)
        .map_or(line.len(), |(i, _)| i);
    let Some(pos) = line[..window_end].find(MARKER) else {
        return Tagged::Skip;
    };

    let rest = line[pos + MARKER.len()..].trim();
    if rest.is_empty() {
        return Tagged::Skip;
    }
    if rest == SENTINEL {
        return Tagged::End;
    }

    let content = match rest.find(COMMENT) {
        Some(i) => rest[..i].trim(),
        None => rest,
    };
    if content.is_empty() {
        Tagged::Skip
    } else {
        Tagged::Content(content)
    }
}

impl<I> Iterator for TaggedLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        for raw in self.lines.by_ref() {
            match classify(raw.as_ref()) {
                Tagged::Skip => continue,
                Tagged::End => break,
                Tagged::Content(text) => return Some(text.to_string()),
            }
        }
        self.done = true;
        None
    }
}

impl<I> std::iter::FusedIterator for TaggedLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
