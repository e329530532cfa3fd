//! JSON renderer — structured output for tooling integration.

use crate::model::*;
use crate::render::Renderer;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub struct JsonRenderer;

#[derive(Serialize)]
struct OptionEntry<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    value_type: &'a str,
    description: &'a str,
}

impl JsonRenderer {
    fn to_value(doc: &ModuleDoc) -> Value {
        let mut sections = Map::new();
        for (section, value) in &doc.sections {
            let value = match value {
                SectionValue::Text(text) => json!(text),
                SectionValue::List(items) => json!(items),
                SectionValue::Options(opts) => {
                    let entries: Vec<OptionEntry> = opts
                        .iter()
                        .map(|(key, desc)| OptionEntry {
                            name: &key.name,
                            value_type: &key.value_type,
                            description: desc,
                        })
                        .collect();
                    json!(entries)
                }
            };
            sections.insert(section.keyword().to_string(), value);
        }

        json!({
            "name": doc.name,
            "source": doc.source,
            "sections": sections,
        })
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &ModuleDoc) -> String {
        // Serializing a Value built from strings cannot fail.
        serde_json::to_string_pretty(&Self::to_value(doc)).unwrap_or_default()
    }

    fn assemble(&self, rendered: &[&str]) -> String {
        let mut out = String::from("[");
        for (i, entry) in rendered.iter().enumerate() {
            out.push_str(if i == 0 { "\n" } else { ",\n" });
            out.push_str(entry);
        }
        if !rendered.is_empty() {
            out.push('\n');
        }
        out.push_str("]\n");
        out
    }
}
