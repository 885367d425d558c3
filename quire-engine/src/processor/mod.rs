//! Per-node processors and the dispatch registry
//!
//! Every AST variant is converted by a [`Processor`]. The [`ProcessorRegistry`] maps a
//! [`NodeVariant`] to its processor; variants without one go through the [`PassThrough`]
//! processor, which returns the concatenated output of the node's children. Dispatch is purely
//! structural: the variant alone picks the processor, never the node's content.
//!
//! Processors receive the [`Invocation`] of the running conversion. It gives access to the style
//! and transform registries, to the render context, and recurses into children through
//! [`Invocation::process_children`].
//!
//! The file structure:
//! ```text
//! processor
//! ├── mod.rs          # Processor trait, registry, pass-through default
//! ├── invocation.rs   # Dispatch, scoped context state, trace dump
//! ├── inline.rs       # Text, specials, inline code, emphasis / strong / strike / links
//! ├── block.rs        # Paragraphs, headers, verbatim blocks, lists, block quotes
//! └── table.rs        # Tables, header / body scopes, rows and cells
//! ```

use crate::ast::{Node, NodeVariant};
use crate::element::Element;
use crate::error::ConversionError;
use crate::style::FontStyle;
use std::collections::HashMap;

pub mod block;
pub mod inline;
pub mod invocation;
pub mod table;

pub use invocation::{Invocation, Scope};

/// Converts one node, and usually its children, into elements.
pub trait Processor: Send + Sync {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError>;
}

/// Default processor: the children's output, unchanged and in order.
#[derive(Debug, Default)]
pub struct PassThrough;

impl Processor for PassThrough {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        inv.process_children(depth, node)
    }
}

/// Processors keyed by node variant.
pub struct ProcessorRegistry {
    processors: HashMap<NodeVariant, Box<dyn Processor>>,
    fallback: Box<dyn Processor>,
}

impl ProcessorRegistry {
    /// A registry where every node passes through.
    pub fn new() -> Self {
        ProcessorRegistry {
            processors: HashMap::new(),
            fallback: Box::new(PassThrough),
        }
    }

    /// Creates a registry with a processor for every built-in variant. `Root` and `Container`
    /// are left to the pass-through default.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(NodeVariant::Text, Box::new(inline::TextProcessor));
        registry.register(NodeVariant::SpecialText, Box::new(inline::TextProcessor));
        registry.register(NodeVariant::Simple, Box::new(inline::SimpleProcessor));
        registry.register(NodeVariant::InlineCode, Box::new(inline::InlineCodeProcessor));
        registry.register(
            NodeVariant::Emphasis,
            Box::new(inline::StyledSpanProcessor::new(FontStyle::ITALIC)),
        );
        registry.register(
            NodeVariant::Strong,
            Box::new(inline::StyledSpanProcessor::new(FontStyle::BOLD)),
        );
        registry.register(
            NodeVariant::Strike,
            Box::new(inline::StyledSpanProcessor::new(FontStyle::STRIKETHROUGH)),
        );
        registry.register(
            NodeVariant::Link,
            Box::new(inline::StyledSpanProcessor::new(FontStyle::UNDERLINE)),
        );

        registry.register(NodeVariant::Paragraph, Box::new(block::ParagraphProcessor));
        registry.register(NodeVariant::Header, Box::new(block::HeaderProcessor));
        registry.register(NodeVariant::Verbatim, Box::new(block::VerbatimProcessor));
        registry.register(NodeVariant::BulletList, Box::new(block::ListProcessor::bullet()));
        registry.register(NodeVariant::OrderedList, Box::new(block::ListProcessor::ordered()));
        registry.register(NodeVariant::ListItem, Box::new(block::ListItemProcessor));
        registry.register(NodeVariant::BlockQuote, Box::new(block::BlockQuoteProcessor));

        registry.register(NodeVariant::Table, Box::new(table::TableProcessor));
        registry.register(NodeVariant::TableHeader, Box::new(table::TableHeaderProcessor));
        registry.register(NodeVariant::TableBody, Box::new(table::TableBodyProcessor));
        registry.register(NodeVariant::TableRow, Box::new(table::TableRowProcessor));
        registry.register(NodeVariant::TableCell, Box::new(table::TableCellProcessor));

        registry
    }

    /// Registers (or replaces) the processor of `variant`.
    pub fn register(&mut self, variant: NodeVariant, processor: Box<dyn Processor>) {
        self.processors.insert(variant, processor);
    }

    /// Processor registered for `variant`, if any.
    pub fn get(&self, variant: NodeVariant) -> Option<&dyn Processor> {
        self.processors.get(&variant).map(|p| p.as_ref())
    }

    /// Processor used for unregistered variants.
    pub fn fallback(&self) -> &dyn Processor {
        self.fallback.as_ref()
    }

    /// Registered variants, sorted.
    pub fn variants(&self) -> Vec<NodeVariant> {
        let mut variants: Vec<_> = self.processors.keys().copied().collect();
        variants.sort_unstable();
        variants
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
