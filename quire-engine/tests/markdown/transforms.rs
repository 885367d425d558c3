//! Verbatim blocks and their content transforms

use quire_engine::ast::Node;
use quire_engine::element::Element;
use quire_engine::transform::StyleSheet;
use quire_engine::Converter;

#[test]
fn test_ditaa_block_becomes_an_image() {
    let md = "```ditaa\n+--+\n|  |\n+--+\n```\n";
    let tree = Converter::default().convert_markdown(md).expect("converts");

    let Element::Image(image) = &tree[0] else {
        panic!("expected an image, got {:?}", tree[0]);
    };
    assert_eq!((image.width, image.height), (80, 84));
    assert_eq!(image.scale_percent, 50.0);
    assert!(image.data.starts_with(b"\x89PNG"));
}

#[test]
fn test_unrenderable_diagram_is_highlighted_instead() {
    let root = Node::root(vec![Node::verbatim(Some("ditaa"), "   \n")]);
    let tree = Converter::default().convert(&root).expect("converts");

    let Element::Paragraph(paragraph) = &tree[0] else {
        panic!("expected highlighted code, got {:?}", tree[0]);
    };
    assert_eq!(tree[0].text(), "   ");
    assert_eq!(
        paragraph.background,
        Some(StyleSheet::default().background_color())
    );
}

#[test]
fn test_code_block_is_highlighted_in_the_code_font() {
    let md = "```rust\nfn main() {}\n```\n";
    let tree = Converter::default().convert_markdown(md).expect("converts");

    let Element::Paragraph(paragraph) = &tree[0] else {
        panic!("expected highlighted code");
    };
    assert_eq!(tree[0].text(), "fn main() {}");
    let Element::Run(keyword) = &paragraph.children[0] else {
        panic!("expected a run");
    };
    assert_eq!(keyword.text, "fn");
    assert_eq!(keyword.font.family, "Courier");
    assert_eq!(keyword.font.size, 10.0);
}

#[test]
fn test_untagged_block_keeps_its_lines() {
    let md = "```\nline one\nline two\n```\n";
    let tree = Converter::default().convert_markdown(md).expect("converts");
    assert_eq!(tree[0].text(), "line one\nline two");
}
