//! Shared helpers for the integration tests.

use quire_engine::element::Element;

/// One line per element: `<indent><kind> <title or text>`. Sections list their children below.
pub fn outline(elements: &[Element]) -> Vec<String> {
    fn walk(element: &Element, indent: usize, out: &mut Vec<String>) {
        let label = match element.as_section() {
            Some(section) => section.title_text(),
            None => element.text(),
        };
        out.push(format!("{}{} {}", "  ".repeat(indent), element.kind(), label));
        if element.as_section().is_some() {
            for child in element.children() {
                walk(child, indent + 1, out);
            }
        }
    }

    let mut out = Vec::new();
    for element in elements {
        walk(element, 0, &mut out);
    }
    out
}

/// Whether a chapter appears anywhere below the top level of `elements`.
pub fn has_nested_chapter(elements: &[Element]) -> bool {
    elements.iter().any(|element| match element {
        Element::Table(table) => table
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .any(|cell| contains_chapter(&cell.content)),
        Element::Section(section) | Element::Chapter(section) => {
            contains_chapter(&section.title) || contains_chapter(&section.children)
        }
        other => contains_chapter(other.children()),
    })
}

/// Whether `elements`, or anything below them, is a chapter.
pub fn contains_chapter(elements: &[Element]) -> bool {
    elements.iter().any(|element| matches!(element, Element::Chapter(_)))
        || has_nested_chapter(elements)
}
