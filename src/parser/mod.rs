//! Parser module — tagged-line filter feeding the section builder.

pub mod sections;
pub mod tagged;

use crate::error::Result;
use crate::model::ModuleDoc;

/// Parse the annotated documentation block of a module source.
///
/// `name` is the module display name, `source` labels the artifact in the
/// model and in errors.
pub fn parse_module(name: &str, source: &str, content: &str) -> Result<ModuleDoc> {
    let sections = sections::build(tagged::tagged_lines(content.lines()), source)?;
    Ok(ModuleDoc::new(name, source, sections))
}
