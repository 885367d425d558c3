//! Treeviz: a visual, line based dump of an element tree.
//!
//! One line per element, nested with box-drawing connectors:
//! `<prefix><connector> <icon> <label>`, labels truncated to 30 characters.
//!
//! ```text
//! ├─ ¶ Some introduction
//! └─ § Getting started
//!   ├─ ¶ Install the binary, then…
//!   └─ ▦ 2 rows, 2 columns
//!     ├─ ▤ Name | Size
//!     └─ ▤ a | 1
//! ```
//!
//! Text runs are folded into the label of their parent and not listed on their own.
//!
//! Icons
//!     Chapter / Section: §
//!     Paragraph: ¶
//!     Run: ◦
//!     List: ☰
//!     ListItem: •
//!     BlockQuote: ❝
//!     Table: ▦   (rows: ▤)
//!     Image: ▣
//!     Symbol: ★
//!     Rule: ⎯

use crate::element::{Element, Table};

const LABEL_WIDTH: usize = 30;

/// Icon of an element kind, as named by [`Element::kind`].
pub fn icon(kind: &str) -> &'static str {
    match kind {
        "Chapter" | "Section" => "§",
        "Paragraph" => "¶",
        "Run" => "◦",
        "List" => "☰",
        "ListItem" => "•",
        "BlockQuote" => "❝",
        "Table" => "▦",
        "TableRow" => "▤",
        "Image" => "▣",
        "Symbol" => "★",
        "Rule" => "⎯",
        _ => "○",
    }
}

/// Renders `elements` as a tree, one line per element.
pub fn render(elements: &[Element]) -> String {
    let mut out = String::new();
    let refs: Vec<&Element> = elements.iter().collect();
    write_children(&refs, "", &mut out);
    out
}

fn write_children(children: &[&Element], prefix: &str, out: &mut String) {
    for (index, child) in children.iter().enumerate() {
        write_element(child, prefix, index + 1 == children.len(), out);
    }
}

fn write_element(element: &Element, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    push_line(out, prefix, connector, icon(element.kind()), &label(element));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    match element {
        Element::Table(table) => write_rows(table, &child_prefix, out),
        _ => {
            let children: Vec<&Element> = element
                .children()
                .iter()
                .filter(|child| !matches!(child, Element::Run(_)))
                .collect();
            write_children(&children, &child_prefix, out);
        }
    }
}

fn write_rows(table: &Table, prefix: &str, out: &mut String) {
    for (index, row) in table.rows.iter().enumerate() {
        let connector = if index + 1 == table.rows.len() {
            "└─"
        } else {
            "├─"
        };
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| cell.content.iter().map(Element::text).collect())
            .collect();
        push_line(out, prefix, connector, icon("TableRow"), &truncate(&cells.join(" | ")));
    }
}

fn push_line(out: &mut String, prefix: &str, connector: &str, icon: &str, label: &str) {
    let line = format!("{prefix}{connector} {icon} {label}");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn label(element: &Element) -> String {
    match element {
        Element::Section(section) | Element::Chapter(section) => truncate(&section.title_text()),
        Element::List(list) => {
            let count = list.items.len();
            let noun = if count == 1 { "item" } else { "items" };
            if list.ordered {
                format!("{count} {noun}, ordered")
            } else {
                format!("{count} {noun}")
            }
        }
        Element::Table(table) => format!("{} rows, {} columns", table.rows.len(), table.columns),
        Element::Image(image) => format!(
            "{}x{} px at {}%",
            image.width, image.height, image.scale_percent
        ),
        Element::Symbol(symbol) => symbol.name.clone(),
        Element::Rule => String::new(),
        other => truncate(&other.text()),
    }
}

fn truncate(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if flat.chars().count() > LABEL_WIDTH {
        let cut: String = flat.chars().take(LABEL_WIDTH - 1).collect();
        format!("{}…", cut.trim_end())
    } else {
        flat.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{List, ListItem, Section};
    use crate::style::Font;

    fn para(text: &str) -> Element {
        Element::paragraph(vec![Element::run(text, Font::default())])
    }

    #[test]
    fn nests_with_connectors() {
        let mut chapter = Section::new(1, vec![Element::run("Intro", Font::default())]);
        chapter.children.push(para("hello"));
        chapter.children.push(Element::List(List {
            ordered: false,
            marker: None,
            items: vec![Element::ListItem(ListItem {
                children: vec![para("one")],
            })],
        }));
        let out = render(&[para("first"), Element::Chapter(chapter), Element::Rule]);
        assert_eq!(
            out,
            "├─ ¶ first\n\
             ├─ § Intro\n\
             │ ├─ ¶ hello\n\
             │ └─ ☰ 1 item\n\
             │   └─ • one\n\
             │     └─ ¶ one\n\
             └─ ⎯\n"
        );
    }

    #[test]
    fn long_labels_are_truncated() {
        let out = render(&[para("a fairly long paragraph that keeps going and going")]);
        assert_eq!(out, "└─ ¶ a fairly long paragraph that…\n");
    }

    #[test]
    fn unknown_kind_icon() {
        assert_eq!(icon("Widget"), "○");
    }
}
