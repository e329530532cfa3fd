//! Section builder — classifies content lines into typed sections.
//!
//! A line equal to a section keyword opens that section; every other line is
//! data for the currently open section, accumulated according to its
//! [`SectionKind`]. Option records pull their description lines from the
//! same stream, so the outer loop never sees them.

use crate::error::{DocError, Result};
use crate::model::*;
use std::collections::BTreeMap;
use std::iter::Peekable;

/// Suffix marking the preferred entry of a list section.
const PREFERRED_MARK: char = '*';

/// Build the section mapping from a stream of content lines.
///
/// `artifact` labels the source in errors.
pub fn build<I>(lines: I, artifact: &str) -> Result<Sections>
where
    I: IntoIterator<Item = String>,
{
    let mut lines = lines.into_iter().peekable();
    let mut sections = Sections::new();
    let mut current: Option<Section> = None;

    while let Some(line) = lines.next() {
        if let Some(section) = Section::from_keyword(&line) {
            current = Some(section);
            continue;
        }

        // Orphaned content before any header attaches to nothing.
        let Some(section) = current else {
            continue;
        };

        match section.kind() {
            SectionKind::Text => append_text(&mut sections, section, &line),
            SectionKind::List => {
                sections.insert(section, SectionValue::List(split_list(&line)));
            }
            SectionKind::Options => {
                let (key, description) = parse_option(&line, &mut lines, artifact)?;
                let entry = sections
                    .entry(section)
                    .or_insert_with(|| SectionValue::Options(BTreeMap::new()));
                if let SectionValue::Options(opts) = entry {
                    opts.insert(key, description);
                }
            }
        }
    }

    Ok(sections)
}

fn append_text(sections: &mut Sections, section: Section, line: &str) {
    match sections.get_mut(&section) {
        Some(SectionValue::Text(text)) => {
            text.push(' ');
            text.push_str(line);
        }
        _ => {
            sections.insert(section, SectionValue::Text(line.to_string()));
        }
    }
}

/// Split a list line on commas, expanding the preferred marker.
///
/// `"YUV420P, RGB24*"` → `["YUV420P", "RGB24 (preferred)"]`
fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|token| {
            let token = token.trim();
            // Any run of trailing marks counts as a single preference.
            let base = token.trim_end_matches(PREFERRED_MARK);
            if base.len() == token.len() {
                token.to_string()
            } else {
                format!("{} (preferred)", base.trim_end())
            }
        })
        .collect()
}

/// Parse one option record: the `name (type)` header plus its description.
///
/// Description lines are consumed up to, but not including, the next line
/// that is a section keyword.
fn parse_option<I>(
    header: &str,
    lines: &mut Peekable<I>,
    artifact: &str,
) -> Result<(OptionKey, String)>
where
    I: Iterator<Item = String>,
{
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let [name, value_type] = tokens.as_slice() else {
        return Err(DocError::MalformedOptionHeader {
            line: header.to_string(),
            artifact: artifact.to_string(),
        });
    };
    let key = OptionKey::new(*name, value_type.trim_matches(['(', ')']));

    let mut body: Vec<String> = Vec::new();
    while let Some(line) = lines.next_if(|l| Section::from_keyword(l).is_none()) {
        body.push(line);
    }

    Ok((key, body.join(" ")))
}
