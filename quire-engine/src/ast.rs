//! Markdown syntax tree consumed by the converter.
//!
//! The tree is produced by a Markdown source (see [`crate::source`]) and is read-only to the
//! converter. Every node has a [`NodeKind`], carrying the variant-specific fields, and an ordered
//! list of children (empty for leaves).

use std::fmt;

/// Typographic specials and structural leaves without content of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    Apostrophe,
    Ellipsis,
    Emdash,
    Endash,
    HRule,
    Linebreak,
    Nbsp,
}

impl SimpleKind {
    /// Text a special stands for. `None` for the horizontal rule, which is not text.
    pub fn text(self) -> Option<&'static str> {
        match self {
            SimpleKind::Apostrophe => Some("\u{2019}"),
            SimpleKind::Ellipsis => Some("\u{2026}"),
            SimpleKind::Emdash => Some("\u{2014}"),
            SimpleKind::Endash => Some("\u{2013}"),
            SimpleKind::Linebreak => Some("\n"),
            SimpleKind::Nbsp => Some("\u{a0}"),
            SimpleKind::HRule => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Root,
    /// Generic grouping node with no meaning of its own.
    Container,
    Text(String),
    /// Text that was escaped in the source (`\*`, `\_`, ...).
    SpecialText(String),
    Simple(SimpleKind),
    Paragraph,
    Header {
        level: usize,
    },
    Verbatim {
        language: Option<String>,
        text: String,
    },
    InlineCode(String),
    BulletList,
    OrderedList,
    ListItem,
    Table {
        columns: usize,
    },
    TableHeader,
    TableBody,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strike,
    BlockQuote,
    Link {
        url: String,
    },
}

/// Fieldless discriminant of a [`NodeKind`], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeVariant {
    Root,
    Container,
    Text,
    SpecialText,
    Simple,
    Paragraph,
    Header,
    Verbatim,
    InlineCode,
    BulletList,
    OrderedList,
    ListItem,
    Table,
    TableHeader,
    TableBody,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strike,
    BlockQuote,
    Link,
}

impl fmt::Display for NodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Node { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Node::new(kind, Vec::new())
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Root, children)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Text(text.into()))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Paragraph, children)
    }

    pub fn header(level: usize, children: Vec<Node>) -> Self {
        Node::new(NodeKind::Header { level }, children)
    }

    pub fn verbatim(language: Option<&str>, text: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Verbatim {
            language: language.map(str::to_string),
            text: text.into(),
        })
    }

    pub fn variant(&self) -> NodeVariant {
        match &self.kind {
            NodeKind::Root => NodeVariant::Root,
            NodeKind::Container => NodeVariant::Container,
            NodeKind::Text(_) => NodeVariant::Text,
            NodeKind::SpecialText(_) => NodeVariant::SpecialText,
            NodeKind::Simple(_) => NodeVariant::Simple,
            NodeKind::Paragraph => NodeVariant::Paragraph,
            NodeKind::Header { .. } => NodeVariant::Header,
            NodeKind::Verbatim { .. } => NodeVariant::Verbatim,
            NodeKind::InlineCode(_) => NodeVariant::InlineCode,
            NodeKind::BulletList => NodeVariant::BulletList,
            NodeKind::OrderedList => NodeVariant::OrderedList,
            NodeKind::ListItem => NodeVariant::ListItem,
            NodeKind::Table { .. } => NodeVariant::Table,
            NodeKind::TableHeader => NodeVariant::TableHeader,
            NodeKind::TableBody => NodeVariant::TableBody,
            NodeKind::TableRow => NodeVariant::TableRow,
            NodeKind::TableCell => NodeVariant::TableCell,
            NodeKind::Emphasis => NodeVariant::Emphasis,
            NodeKind::Strong => NodeVariant::Strong,
            NodeKind::Strike => NodeVariant::Strike,
            NodeKind::BlockQuote => NodeVariant::BlockQuote,
            NodeKind::Link { .. } => NodeVariant::Link,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Heading level, for header nodes.
    pub fn level(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Header { level } => Some(level),
            _ => None,
        }
    }

    /// Language tag, for verbatim nodes that declare one.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Verbatim { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Raw text of text-like leaves and verbatim blocks.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text)
            | NodeKind::SpecialText(text)
            | NodeKind::InlineCode(text)
            | NodeKind::Verbatim { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Concatenated raw text of this node and its descendants.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        self.collect_text_into(&mut out);
        out
    }

    fn collect_text_into(&self, out: &mut String) {
        if let Some(text) = self.raw_text() {
            out.push_str(text);
        } else if let NodeKind::Simple(simple) = self.kind {
            out.push_str(simple.text().unwrap_or_default());
        }
        for child in &self.children {
            child.collect_text_into(out);
        }
    }
}
