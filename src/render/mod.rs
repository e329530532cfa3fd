//! Renderer module — trait-based format dispatch.

pub mod docbook;
pub mod json;
pub mod text;

use crate::error::{DocError, Result};
use crate::model::ModuleDoc;

/// Trait for rendering a ModuleDoc into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &ModuleDoc) -> String;

    /// Combine the rendered modules of one batch into the final output.
    fn assemble(&self, rendered: &[&str]) -> String {
        let mut out = rendered.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "docbook" | "xml" => Ok(Box::new(docbook::DocbookRenderer)),
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(DocError::UnknownFormat(format.to_string())),
    }
}
