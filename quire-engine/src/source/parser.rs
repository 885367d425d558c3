//! Comrak AST → syntax tree

use crate::ast::{Node, NodeKind, SimpleKind};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parses `source` into a tree rooted at a `Root` node.
pub fn parse(source: &str) -> Node {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut nodes = Vec::new();
    convert(root, &mut nodes);
    match nodes.pop() {
        Some(node) if node.kind == NodeKind::Root => node,
        Some(node) => Node::root(vec![node]),
        None => Node::root(Vec::new()),
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.parse.smart = true;
    options
}

/// Appends the node(s) `node` maps to.
fn convert<'a>(node: &'a AstNode<'a>, out: &mut Vec<Node>) {
    let data = node.data.borrow();

    let kind = match &data.value {
        NodeValue::Document => NodeKind::Root,
        NodeValue::Text(text) => {
            split_typography(text, out);
            return;
        }
        NodeValue::SoftBreak => {
            out.push(Node::text(" "));
            return;
        }
        NodeValue::LineBreak => NodeKind::Simple(SimpleKind::Linebreak),
        NodeValue::ThematicBreak => NodeKind::Simple(SimpleKind::HRule),
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Header {
            level: heading.level as usize,
        },
        NodeValue::CodeBlock(block) => {
            let language = block.info.split_whitespace().next();
            out.push(Node::verbatim(language, block.literal.clone()));
            return;
        }
        NodeValue::Code(code) => NodeKind::InlineCode(code.literal.clone()),
        NodeValue::List(list) => {
            let kind = match list.list_type {
                ListType::Ordered => NodeKind::OrderedList,
                ListType::Bullet => NodeKind::BulletList,
            };
            out.push(list_node(node, kind));
            return;
        }
        NodeValue::Item(_) => NodeKind::ListItem,
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Strike,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.clone(),
        },
        NodeValue::Table(table) => {
            out.push(table_node(node, table.alignments.len()));
            return;
        }
        NodeValue::TableRow(_) => NodeKind::TableRow,
        NodeValue::TableCell => NodeKind::TableCell,
        NodeValue::FrontMatter(_) | NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => return,
        // images keep their alt text; anything else is a plain grouping
        _ => NodeKind::Container,
    };

    out.push(Node::new(kind, children(node)));
}

fn children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut out = Vec::new();
    for child in node.children() {
        convert(child, &mut out);
    }
    out
}

/// Every child of a list is a list item, task items included.
fn list_node<'a>(node: &'a AstNode<'a>, kind: NodeKind) -> Node {
    let items = children(node)
        .into_iter()
        .map(|mut item| {
            if item.kind == NodeKind::Container {
                item.kind = NodeKind::ListItem;
            }
            item
        })
        .collect();
    Node::new(kind, items)
}

/// Regroups the rows of a table into a header and a body.
fn table_node<'a>(node: &'a AstNode<'a>, columns: usize) -> Node {
    let mut header = Vec::new();
    let mut body = Vec::new();
    for row in node.children() {
        let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        if is_header {
            convert(row, &mut header);
        } else {
            convert(row, &mut body);
        }
    }

    let mut groups = Vec::new();
    if !header.is_empty() {
        groups.push(Node::new(NodeKind::TableHeader, header));
    }
    if !body.is_empty() {
        groups.push(Node::new(NodeKind::TableBody, body));
    }
    Node::new(NodeKind::Table { columns }, groups)
}

fn typographic_special(ch: char) -> Option<SimpleKind> {
    match ch {
        '\u{2019}' => Some(SimpleKind::Apostrophe),
        '\u{2026}' => Some(SimpleKind::Ellipsis),
        '\u{2014}' => Some(SimpleKind::Emdash),
        '\u{2013}' => Some(SimpleKind::Endash),
        '\u{a0}' => Some(SimpleKind::Nbsp),
        _ => None,
    }
}

/// Splits `text` into text nodes and typographic specials.
fn split_typography(text: &str, out: &mut Vec<Node>) {
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if let Some(kind) = typographic_special(ch) {
            if start < index {
                out.push(Node::text(&text[start..index]));
            }
            out.push(Node::leaf(NodeKind::Simple(kind)));
            start = index + ch.len_utf8();
        }
    }
    if start < text.len() {
        out.push(Node::text(&text[start..]));
    }
}
