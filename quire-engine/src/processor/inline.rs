//! Inline processors: text runs and font-styled spans.

use super::{Invocation, Processor};
use crate::ast::{Node, NodeKind};
use crate::element::{Element, TextRun};
use crate::error::ConversionError;
use crate::style::{FontStyle, INLINE_CODE_BACKGROUND, INLINE_CODE_FONT};

/// Text and escaped text: one run in the current font.
#[derive(Debug, Default)]
pub struct TextProcessor;

impl Processor for TextProcessor {
    fn process(
        &self,
        _depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let text = node.raw_text().unwrap_or_default();
        Ok(vec![Element::run(text, inv.current_font().clone())])
    }
}

/// Typographic specials become their text; a horizontal rule becomes [`Element::Rule`].
#[derive(Debug, Default)]
pub struct SimpleProcessor;

impl Processor for SimpleProcessor {
    fn process(
        &self,
        _depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let NodeKind::Simple(kind) = node.kind else {
            return Ok(Vec::new());
        };
        Ok(match kind.text() {
            Some(text) => vec![Element::run(text, inv.current_font().clone())],
            None => vec![Element::Rule],
        })
    }
}

/// Inline code: a run in the inline code font on the inline code background.
#[derive(Debug, Default)]
pub struct InlineCodeProcessor;

impl Processor for InlineCodeProcessor {
    fn process(
        &self,
        _depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let styles = inv.styles();
        let font = styles
            .resolve(INLINE_CODE_FONT)
            .unwrap_or_else(|| inv.current_font().clone());
        Ok(vec![Element::Run(TextRun {
            text: node.raw_text().unwrap_or_default().to_string(),
            font,
            background: styles.resolve_color(INLINE_CODE_BACKGROUND),
        })])
    }
}

/// Emphasis, strong, strike and links: the children in the current font with `style` added.
#[derive(Debug)]
pub struct StyledSpanProcessor {
    style: FontStyle,
}

impl StyledSpanProcessor {
    pub fn new(style: FontStyle) -> Self {
        StyledSpanProcessor { style }
    }
}

impl Processor for StyledSpanProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let font = inv.current_font().with_style(self.style);
        let mut inv = inv.with_font(font);
        inv.process_children(depth, node)
    }
}
