//! Plain text renderer — key-sorted dump of the raw section mapping.

use crate::model::*;
use crate::render::Renderer;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, doc: &ModuleDoc) -> String {
        let mut entries: Vec<(&str, String)> = doc
            .sections
            .iter()
            .map(|(section, value)| (section.keyword(), render_value(value)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        entries
            .into_iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn assemble(&self, rendered: &[&str]) -> String {
        let mut out = rendered.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

fn render_value(value: &SectionValue) -> String {
    match value {
        SectionValue::Text(text) => text.clone(),
        SectionValue::List(items) => format!("[{}]", items.join(", ")),
        SectionValue::Options(opts) => {
            let entries: Vec<String> = opts
                .iter()
                .map(|(key, desc)| format!("{}: {}", key, desc))
                .collect();
            format!("{{{}}}", entries.join("; "))
        }
    }
}
