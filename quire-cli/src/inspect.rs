//! Inspect output formats
//!
//! Each format renders one stage of the conversion of a Markdown file:
//!
//! - `treeviz`: the element tree, one line per element with box-drawing connectors (default)
//! - `json`: the element tree as JSON
//! - `ast`: the parsed syntax tree, before any processor runs
//!
//! Example: `quire inspect notes.md json`

use quire_engine::{treeviz, Converter, Markdown, Node, NodeKind};

/// All formats accepted by `quire inspect`.
pub const AVAILABLE_FORMATS: &[&str] = &["treeviz", "json", "ast"];

pub const DEFAULT_FORMAT: &str = "treeviz";

/// Renders `source` in `format`.
pub fn execute(source: &Markdown, format: &str, converter: &Converter) -> Result<String, String> {
    match format {
        "ast" => Ok(render_ast(&source.parse())),
        "treeviz" | "json" => {
            let tree = converter
                .convert(&source.parse())
                .map_err(|e| format!("Conversion failed: {e}"))?;
            if format == "json" {
                serde_json::to_string_pretty(&tree)
                    .map(|json| json + "\n")
                    .map_err(|e| format!("JSON serialization failed: {e}"))
            } else {
                Ok(treeviz::render(&tree))
            }
        }
        other => Err(format!(
            "Unknown format '{other}'. Available: {}",
            AVAILABLE_FORMATS.join(", ")
        )),
    }
}

/// One line per node, indented two spaces per level.
fn render_ast(root: &Node) -> String {
    fn walk(node: &Node, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.variant().to_string());
        match &node.kind {
            NodeKind::Header { level } => out.push_str(&format!(" L:{level}")),
            NodeKind::Verbatim {
                language: Some(language),
                ..
            } => out.push_str(&format!(" T:{language}")),
            NodeKind::Table { columns } => out.push_str(&format!(" C:{columns}")),
            _ => {}
        }
        if let Some(text) = node.raw_text() {
            out.push_str(&format!(" {text:?}"));
        }
        out.push('\n');
        for child in node.children() {
            walk(child, depth + 1, out);
        }
    }

    let mut out = String::new();
    walk(root, 0, &mut out);
    out
}
