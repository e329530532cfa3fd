//! DocBook renderer — one `varlistentry` per module for the manual's
//! module list.

use crate::model::*;
use crate::render::Renderer;

pub struct DocbookRenderer;

const BEGIN_LIST: &str = "<!-- begin module list -->";
const END_LIST: &str = "<!-- end module list -->";

// Indentation of the entry inside the surrounding variablelist.
const INDENT: &str = "            ";

impl Renderer for DocbookRenderer {
    fn render(&self, doc: &ModuleDoc) -> String {
        let mut lines: Vec<String> = vec![format!("<!-- {} -->", doc.source)];
        if doc.is_empty() {
            return lines.join("\n");
        }

        let media = doc.list(Section::Media).unwrap_or_default().join(",");

        push(&mut lines, 0, "<varlistentry>");
        push(&mut lines, 1, "<term>");
        push(&mut lines, 2, &format!("<option>{}</option>", xml_escape(&doc.name)));
        push(&mut lines, 2, &format!("<emphasis>[{}]</emphasis>", xml_escape(&media)));
        push(&mut lines, 1, "</term>");
        push(&mut lines, 1, "<listitem>");

        if let Some(desc) = doc.text(Section::Description) {
            push_para(&mut lines, 2, desc);
        }
        if let Some(deps) = doc.text(Section::BuildDepends) {
            push_para(&mut lines, 2, &format!("At compile time, this module requires: {}", deps));
        }
        if let Some(deps) = doc.text(Section::Depends) {
            push_para(&mut lines, 2, &format!("At run time, this module requires: {}", deps));
        }

        if let Some(opts) = doc.options().filter(|o| !o.is_empty()) {
            push_para(&mut lines, 2, "This module accepts the following options:");
            for (key, desc) in opts {
                render_option(&mut lines, key, desc);
            }
        }

        push(&mut lines, 1, "</listitem>");
        push(&mut lines, 0, "</varlistentry>");
        lines.join("\n")
    }

    fn assemble(&self, rendered: &[&str]) -> String {
        let mut out = String::new();
        out.push_str(BEGIN_LIST);
        out.push('\n');
        for entry in rendered {
            out.push_str(entry);
            out.push('\n');
        }
        out.push_str(END_LIST);
        out.push('\n');
        out
    }
}

fn render_option(lines: &mut Vec<String>, key: &OptionKey, desc: &str) {
    push(lines, 2, "<variablelist>");
    push(lines, 3, "<varlistentry>");
    push(lines, 4, "<term>");
    push(lines, 5, &format!("<literal>{}</literal>", xml_escape(&key.to_string())));
    push(lines, 4, "</term>");
    push(lines, 4, "<listitem>");
    push_para(lines, 5, desc);
    push(lines, 4, "</listitem>");
    push(lines, 3, "</varlistentry>");
    push(lines, 2, "</variablelist>");
}

fn push(lines: &mut Vec<String>, depth: usize, text: &str) {
    lines.push(format!("{}{}{}", INDENT, "    ".repeat(depth), text));
}

fn push_para(lines: &mut Vec<String>, depth: usize, text: &str) {
    push(lines, depth, &format!("<para>{}</para>", xml_escape(text)));
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_module;

    fn doc(src: &str) -> ModuleDoc {
        parse_module("x11", "import_x11.c", src).unwrap()
    }

    #[test]
    fn empty_module_is_a_comment_only() {
        let out = DocbookRenderer.render(&doc("int x;\n"));
        assert_eq!(out, "<!-- import_x11.c -->");
    }

    #[test]
    fn full_entry() {
        let src = " *%* DESCRIPTION\n *%* Grabs frames.\n *%* DEPENDS\n *%* libx11 >= 1.0\n \
                   *%* MEDIA\n *%* video*, audio\n *%* OPTION\n *%* skew_limit (integer)\n \
                   *%* max skew\n";
        let out = DocbookRenderer.render(&doc(src));
        let expected = [
            "<!-- import_x11.c -->",
            "            <varlistentry>",
            "                <term>",
            "                    <option>x11</option>",
            "                    <emphasis>[video (preferred),audio]</emphasis>",
            "                </term>",
            "                <listitem>",
            "                    <para>Grabs frames.</para>",
            "                    <para>At run time, this module requires: libx11 &gt;= 1.0</para>",
            "                    <para>This module accepts the following options:</para>",
            "                    <variablelist>",
            "                        <varlistentry>",
            "                            <term>",
            "                                <literal>skew_limit (integer)</literal>",
            "                            </term>",
            "                            <listitem>",
            "                                <para>max skew</para>",
            "                            </listitem>",
            "                        </varlistentry>",
            "                    </variablelist>",
            "                </listitem>",
            "            </varlistentry>",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn build_depends_paragraph() {
        let out = DocbookRenderer.render(&doc(" *%* BUILD-DEPENDS\n *%* libmp3lame\n"));
        assert!(out.contains("<para>At compile time, this module requires: libmp3lame</para>"));
        assert!(out.contains("<emphasis>[]</emphasis>"));
        assert!(!out.contains("following options"));
    }

    #[test]
    fn assemble_wraps_list() {
        let out = DocbookRenderer.assemble(&["<!-- a.c -->"]);
        assert_eq!(
            out,
            "<!-- begin module list -->\n<!-- a.c -->\n<!-- end module list -->\n"
        );
    }
}
