//! Dispatch, scoping and reassembly through the public API.

use crate::common::outline;
use quire_engine::ast::{Node, NodeKind, NodeVariant};
use quire_engine::context::ContextDepths;
use quire_engine::element::Element;
use quire_engine::processor::{Invocation, ProcessorRegistry};
use quire_engine::style::{
    heading_role, Color, FontDescriptor, FontStyle, StyleRegistry, HELVETICA,
};
use quire_engine::transform::{StyleSheet, SyntaxHighlighter, TransformRegistry};
use quire_engine::{ConversionError, Converter};

const INITIAL: ContextDepths = ContextDepths {
    fonts: 1,
    tables: 0,
    cell_stylers: 0,
};

fn transforms() -> TransformRegistry {
    TransformRegistry::new(SyntaxHighlighter::new(
        StyleRegistry::with_defaults().default_font(),
        StyleSheet::default(),
    ))
}

fn title(text: &str) -> Vec<Node> {
    vec![Node::text(text)]
}

#[test]
fn unregistered_variant_concatenates_children_in_order() {
    let processors = ProcessorRegistry::with_defaults();
    let styles = StyleRegistry::with_defaults();
    let transforms = transforms();
    let mut inv = Invocation::new(&processors, &styles, &transforms);

    let node = Node::new(NodeKind::Container, vec![Node::text("first"), Node::text("second")]);
    let elements = inv.process(1, &node).expect("converts");

    assert_eq!(elements.len(), 2);
    assert!(matches!(&elements[0], Element::Run(run) if run.text == "first"));
    assert!(matches!(&elements[1], Element::Run(run) if run.text == "second"));
}

#[test]
fn empty_registry_passes_everything_through() {
    let converter = Converter::with_processors(
        ProcessorRegistry::new(),
        StyleRegistry::with_defaults(),
        transforms(),
    );
    let tree = converter
        .convert(&Node::root(vec![Node::paragraph(title("x"))]))
        .expect("converts");
    assert!(tree.is_empty());
}

#[test]
fn sections_nest_under_their_chapter() {
    let root = Node::root(vec![
        Node::header(1, title("A")),
        Node::paragraph(title("x")),
        Node::header(2, title("B")),
        Node::paragraph(title("y")),
    ]);
    let tree = Converter::default().convert(&root).expect("converts");
    assert_eq!(
        outline(&tree),
        vec!["Chapter A", "  Paragraph x", "  Section B", "    Paragraph y"]
    );
}

#[test]
fn leading_content_stays_top_level() {
    let root = Node::root(vec![Node::paragraph(title("x")), Node::header(1, title("A"))]);
    let tree = Converter::default().convert(&root).expect("converts");
    assert_eq!(outline(&tree), vec!["Paragraph x", "Chapter A"]);
}

#[test]
fn only_the_root_is_assembled() {
    let processors = ProcessorRegistry::with_defaults();
    let styles = StyleRegistry::with_defaults();
    let transforms = transforms();
    let mut inv = Invocation::new(&processors, &styles, &transforms);

    let quote = Node::new(
        NodeKind::BlockQuote,
        vec![Node::header(1, title("A")), Node::paragraph(title("x"))],
    );
    let elements = inv.process(1, &quote).expect("converts");
    let Element::BlockQuote(quote) = &elements[0] else {
        panic!("expected a block quote");
    };
    assert!(matches!(&quote.children[0], Element::Section(_)));
    assert!(matches!(&quote.children[1], Element::Paragraph(_)));
}

#[test]
fn heading_fonts_fall_back_downward_only() {
    let mut styles = StyleRegistry::new();
    let h1 = FontDescriptor::new(HELVETICA, 18.0, FontStyle::BOLD, Color::BLACK);
    let h2 = FontDescriptor::new(HELVETICA, 16.0, FontStyle::BOLD, Color::DARK_GRAY);
    styles.register(heading_role(1), h1.clone());
    styles.register(heading_role(2), h2.clone());

    assert_eq!(styles.heading_descriptor(3), Some(&h2));
    assert_eq!(styles.heading_descriptor(4), Some(&h2));

    let mut sparse = StyleRegistry::new();
    sparse.register(heading_role(1), h1.clone());
    sparse.register(heading_role(4), h2);
    assert_eq!(sparse.heading_descriptor(3), Some(&h1));
}

#[test]
fn context_is_balanced_after_success_and_failure() {
    let processors = ProcessorRegistry::with_defaults();
    let styles = StyleRegistry::with_defaults();
    let transforms = transforms();

    let ok = Node::root(vec![Node::new(
        NodeKind::Strong,
        vec![Node::new(NodeKind::Emphasis, vec![Node::text("x")])],
    )]);
    let mut inv = Invocation::new(&processors, &styles, &transforms);
    inv.process(0, &ok).expect("converts");
    assert_eq!(inv.context().depths(), INITIAL);

    let misplaced_cell = Node::root(vec![Node::new(
        NodeKind::Strong,
        vec![Node::new(
            NodeKind::Table { columns: 1 },
            vec![Node::new(NodeKind::TableCell, title("x"))],
        )],
    )]);
    let mut inv = Invocation::new(&processors, &styles, &transforms);
    assert_eq!(
        inv.process(0, &misplaced_cell).unwrap_err(),
        ConversionError::NoCellStyler {
            processor: NodeVariant::TableCell
        }
    );
    assert_eq!(inv.context().depths(), INITIAL);

    let orphan_row = Node::root(vec![Node::new(
        NodeKind::Strong,
        vec![Node::new(NodeKind::TableRow, title("x"))],
    )]);
    let mut inv = Invocation::new(&processors, &styles, &transforms);
    assert_eq!(
        inv.process(0, &orphan_row).unwrap_err(),
        ConversionError::NoOpenTable {
            processor: NodeVariant::TableRow
        }
    );
    assert_eq!(inv.context().depths(), INITIAL);
}

#[test]
fn conversions_do_not_share_state() {
    let converter = Converter::default();
    let root = Node::root(vec![
        Node::header(1, title("A")),
        Node::new(
            NodeKind::Table { columns: 1 },
            vec![Node::new(
                NodeKind::TableBody,
                vec![
                    Node::new(NodeKind::TableRow, vec![Node::new(NodeKind::TableCell, title("1"))]),
                    Node::new(NodeKind::TableRow, vec![Node::new(NodeKind::TableCell, title("2"))]),
                ],
            )],
        ),
    ]);
    let first = converter.convert(&root).expect("converts");
    let second = converter.convert(&root).expect("converts");
    assert_eq!(first, second);
}
