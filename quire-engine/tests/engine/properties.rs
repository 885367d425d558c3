//! Property tests over random syntax trees.

use crate::common::has_nested_chapter;
use proptest::prelude::*;
use quire_engine::ast::{Node, NodeKind, SimpleKind};
use quire_engine::context::ContextDepths;
use quire_engine::processor::Invocation;
use quire_engine::Converter;

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(|text| Node::text(text)),
        Just(Node::leaf(NodeKind::Simple(SimpleKind::Ellipsis))),
        Just(Node::leaf(NodeKind::Simple(SimpleKind::HRule))),
        "[a-z]{1,6}".prop_map(|code| Node::leaf(NodeKind::InlineCode(code))),
        "[a-z \n]{0,12}".prop_map(|code| Node::verbatim(Some("rust"), code)),
    ]
}

/// Every kind with children, table kinds included so that misplaced rows and cells come up.
fn container_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Container),
        Just(NodeKind::Paragraph),
        (1usize..=4).prop_map(|level| NodeKind::Header { level }),
        Just(NodeKind::Emphasis),
        Just(NodeKind::Strong),
        Just(NodeKind::Strike),
        Just(NodeKind::BulletList),
        Just(NodeKind::OrderedList),
        Just(NodeKind::ListItem),
        Just(NodeKind::BlockQuote),
        (0usize..4).prop_map(|columns| NodeKind::Table { columns }),
        Just(NodeKind::TableHeader),
        Just(NodeKind::TableBody),
        Just(NodeKind::TableRow),
        Just(NodeKind::TableCell),
    ]
}

fn document() -> impl Strategy<Value = Node> {
    let tree = leaf().prop_recursive(4, 48, 4, |inner| {
        (container_kind(), prop::collection::vec(inner, 0..4))
            .prop_map(|(kind, children)| Node::new(kind, children))
    });
    prop::collection::vec(tree, 0..6).prop_map(Node::root)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn context_returns_to_its_initial_depth(root in document()) {
        let converter = Converter::default();
        let mut inv = Invocation::new(
            converter.processors(),
            converter.styles(),
            converter.transforms(),
        );
        let _ = inv.process(0, &root);
        prop_assert_eq!(
            inv.context().depths(),
            ContextDepths { fonts: 1, tables: 0, cell_stylers: 0 }
        );
    }

    #[test]
    fn conversion_is_repeatable(root in document()) {
        let converter = Converter::default();
        prop_assert_eq!(converter.convert(&root), converter.convert(&root));
    }

    #[test]
    fn chapters_only_at_top_level(root in document()) {
        if let Ok(tree) = Converter::default().convert(&root) {
            prop_assert!(!has_nested_chapter(&tree));
        }
    }
}
