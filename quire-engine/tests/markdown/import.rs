//! Markdown → element tree

use crate::common::outline;
use quire_engine::element::Element;
use quire_engine::style::{Color, FontStyle};
use quire_engine::Converter;

fn convert(md: &str) -> Vec<Element> {
    Converter::default()
        .convert_markdown(md)
        .expect("markdown converts")
}

#[test]
fn test_document_outline() {
    let md = "Intro paragraph.\n\n# Guide\n\nSome *emphasis* and **bold**.\n\n## Setup\n\n1. first\n2. second\n\n> quoted\n\n# Reference\n\n---\n";
    assert_eq!(
        outline(&convert(md)),
        vec![
            "Paragraph Intro paragraph.",
            "Chapter Guide",
            "  Paragraph Some emphasis and bold.",
            "  Section Setup",
            "    List firstsecond",
            "    BlockQuote quoted",
            "Chapter Reference",
            "  Rule ",
        ]
    );
}

#[test]
fn test_deep_headings_nest_under_the_closest_shallower_one() {
    let md = "# A\n\n### Deep\n\n## B\n\ntext\n";
    assert_eq!(
        outline(&convert(md)),
        vec!["Chapter A", "  Section Deep", "  Section B", "    Paragraph text"]
    );
}

#[test]
fn test_section_without_chapter_is_promoted() {
    let md = "## Alone\n\ntext\n";
    assert_eq!(outline(&convert(md)), vec!["Chapter Alone", "  Paragraph text"]);
}

#[test]
fn test_inline_styles() {
    let tree = convert("plain *it* **bold** ~~gone~~ `code`\n");
    let Element::Paragraph(paragraph) = &tree[0] else {
        panic!("expected a paragraph, got {:?}", tree[0]);
    };
    let runs: Vec<_> = paragraph
        .children
        .iter()
        .filter_map(|element| match element {
            Element::Run(run) if !run.text.trim().is_empty() => Some(run),
            _ => None,
        })
        .collect();

    assert_eq!(runs[0].text, "plain ");
    assert!(runs[0].font.style.is_normal());
    assert_eq!(runs[1].text, "it");
    assert!(runs[1].font.style.contains(FontStyle::ITALIC));
    assert_eq!(runs[2].text, "bold");
    assert!(runs[2].font.style.contains(FontStyle::BOLD));
    assert_eq!(runs[3].text, "gone");
    assert!(runs[3].font.style.contains(FontStyle::STRIKETHROUGH));
    assert_eq!(runs[4].text, "code");
    assert_eq!(runs[4].background, Some(Color::LIGHT_GRAY));
}

#[test]
fn test_heading_title_uses_heading_font() {
    let tree = convert("# Title\n");
    let Element::Chapter(chapter) = &tree[0] else {
        panic!("expected a chapter");
    };
    let Element::Run(run) = &chapter.title[0] else {
        panic!("expected a title run");
    };
    assert_eq!(run.font.size, 18.0);
    assert!(run.font.style.contains(FontStyle::BOLD));
}

#[test]
fn test_table_rows_are_striped_after_the_header() {
    let tree = convert("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n");
    let Element::Table(table) = &tree[0] else {
        panic!("expected a table");
    };
    assert_eq!(table.columns, 2);
    assert_eq!(table.rows.len(), 3);

    let header = &table.rows[0].cells[0];
    assert_eq!(header.background, Some(Color::BLACK));
    assert_eq!(header.font.color, Color::WHITE);
    assert!(header.font.style.contains(FontStyle::BOLD));

    let backgrounds: Vec<_> = table.rows[1..]
        .iter()
        .map(|row| row.cells[0].background)
        .collect();
    assert_eq!(backgrounds, vec![Some(Color::VERY2_LIGHT_GRAY), None]);
    assert_eq!(table.rows[2].cells[1].content[0].text(), "4");
}

#[test]
fn test_bullet_list_items_carry_a_marker() {
    let tree = convert("- [x] done\n- [ ] todo\n- plain\n");
    let Element::List(list) = &tree[0] else {
        panic!("expected a list");
    };
    assert!(!list.ordered);
    assert_eq!(list.items.len(), 3);
    assert!(list.items.iter().all(|item| matches!(item, Element::ListItem(_))));
    let marker = list.marker.as_ref().expect("bullet marker");
    assert_eq!(marker.name, "circle");
    assert_eq!(marker.size, 6.0);
}

#[test]
fn test_front_matter_and_html_are_dropped() {
    let md = "---\ntitle: x\n---\n\n<div>raw</div>\n\nbody\n";
    assert_eq!(outline(&convert(md)), vec!["Paragraph body"]);
}

#[test]
fn test_smart_punctuation() {
    let tree = convert("it's done...\n");
    assert_eq!(tree[0].text(), "it\u{2019}s done\u{2026}");
}
