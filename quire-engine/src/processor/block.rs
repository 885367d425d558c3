//! Block processors: paragraphs, headers, verbatim blocks, lists and quotes.

use super::{Invocation, Processor};
use crate::ast::Node;
use crate::element::{BlockQuote, Element, List, ListItem, Section};
use crate::error::ConversionError;
use crate::style::CODE_FONT;
use crate::symbols;

/// Bullet marker size, relative to the list's font size.
const MARKER_SCALE: f32 = 0.5;

#[derive(Debug, Default)]
pub struct ParagraphProcessor;

impl Processor for ParagraphProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let children = inv.process_children(depth, node)?;
        Ok(vec![Element::paragraph(children)])
    }
}

/// A standalone section titled with the header's inline content, in the heading font of its
/// level. Nesting is left to the tree assembler.
#[derive(Debug, Default)]
pub struct HeaderProcessor;

impl Processor for HeaderProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let level = node.level().unwrap_or(1).max(1);
        let font = inv.styles().section_title_font(level);
        let mut inv = inv.with_font(font);
        let title = inv.process_children(depth, node)?;
        Ok(vec![Element::Section(Section::new(level, title))])
    }
}

/// Code blocks: handed to the content transform accepting their language, in the code font.
#[derive(Debug, Default)]
pub struct VerbatimProcessor;

impl Processor for VerbatimProcessor {
    fn process(
        &self,
        _depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let font = inv
            .styles()
            .resolve(CODE_FONT)
            .unwrap_or_else(|| inv.current_font().clone());
        let transforms = inv.transforms();
        let _scope = inv.with_font(font);
        let code = node.raw_text().unwrap_or_default();
        Ok(transforms.process(node.language(), code))
    }
}

#[derive(Debug)]
pub struct ListProcessor {
    ordered: bool,
}

impl ListProcessor {
    pub fn bullet() -> Self {
        ListProcessor { ordered: false }
    }

    pub fn ordered() -> Self {
        ListProcessor { ordered: true }
    }
}

impl Processor for ListProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let marker = if self.ordered {
            None
        } else {
            let font = inv.current_font();
            symbols::symbol("circle", font.size * MARKER_SCALE, font.color)
        };
        let items = inv.process_children(depth, node)?;
        Ok(vec![Element::List(List {
            ordered: self.ordered,
            marker,
            items,
        })])
    }
}

#[derive(Debug, Default)]
pub struct ListItemProcessor;

impl Processor for ListItemProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let children = inv.process_children(depth, node)?;
        Ok(vec![Element::ListItem(ListItem { children })])
    }
}

#[derive(Debug, Default)]
pub struct BlockQuoteProcessor;

impl Processor for BlockQuoteProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let children = inv.process_children(depth, node)?;
        Ok(vec![Element::BlockQuote(BlockQuote { children })])
    }
}
