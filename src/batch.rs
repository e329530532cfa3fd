//! Batch processing — one document per module source, rendered in order.
//!
//! Sources that cannot be read are skipped without an error, so a module
//! list can be regenerated from a partial tree. Malformed documentation
//! blocks are reported per artifact and do not stop the rest of the batch.

use crate::error::{DocError, LoadError};
use crate::model::ModuleDoc;
use crate::parser;
use crate::render::Renderer;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// `<kind>_<name>.<ext>`, e.g. import_x11.c, filter_levels.c
static RE_MODULE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^_]+_([^_]+?)(?:\.[^._]*)?$").unwrap());

/// Result of processing a single artifact.
#[derive(Debug)]
pub enum Outcome {
    Rendered(String),
    Skipped { path: PathBuf, error: io::Error },
    Failed(DocError),
}

/// Outcomes of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn rendered(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Rendered(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Skipped { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DocError> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Failed(e) => Some(e),
            _ => None,
        })
    }

    /// Final output of the batch, wrapped the way the renderer wants it.
    pub fn assemble(&self, renderer: &dyn Renderer) -> String {
        renderer.assemble(&self.rendered())
    }
}

/// Derive the module display name from a source path.
/// "import/import_x11.c" → "x11", "filter_levels.c" → "levels"
///
/// Names outside the `<kind>_<name>` convention fall back to the file stem.
pub fn module_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();
    if let Some(caps) = RE_MODULE_FILE.captures(&file_name) {
        return caps[1].to_string();
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or(file_name)
}

/// Read and parse one module source.
///
/// Bytes that are not valid UTF-8 (e.g. Latin-1 author names in headers)
/// are replaced rather than rejected.
pub fn load_module(path: &Path) -> Result<ModuleDoc, LoadError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let source = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(parser::parse_module(&module_name(path), &source, &content)?)
}

/// Build and render every artifact, continuing past unreadable ones.
pub fn process<P: AsRef<Path>>(paths: &[P], renderer: &dyn Renderer) -> BatchReport {
    let outcomes = paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            match load_module(path) {
                Ok(doc) => Outcome::Rendered(renderer.render(&doc)),
                Err(LoadError::Io(error)) => {
                    tracing::debug!(path = %path.display(), %error, "skipping unreadable module source");
                    Outcome::Skipped {
                        path: path.to_path_buf(),
                        error,
                    }
                }
                Err(LoadError::Doc(error)) => Outcome::Failed(error),
            }
        })
        .collect();
    BatchReport { outcomes }
}
