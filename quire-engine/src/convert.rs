//! Conversion entry point.

use crate::ast::Node;
use crate::element::Element;
use crate::error::ConversionError;
use crate::processor::{Invocation, ProcessorRegistry};
use crate::source::Markdown;
use crate::style::{StyleRegistry, CODE_FONT};
use crate::transform::{DiagramSettings, StyleSheet, SyntaxHighlighter, TransformRegistry};

/// Font size of highlighted code blocks.
pub const HIGHLIGHT_FONT_SIZE: f32 = 10.0;

/// Converts syntax trees into element trees.
///
/// The registries are read-only once built; every call to [`Converter::convert`] works on its
/// own [`Invocation`], so one converter can be shared between threads.
pub struct Converter {
    processors: ProcessorRegistry,
    styles: StyleRegistry,
    transforms: TransformRegistry,
}

impl Converter {
    /// A converter with every built-in processor.
    pub fn new(styles: StyleRegistry, transforms: TransformRegistry) -> Self {
        Converter::with_processors(ProcessorRegistry::with_defaults(), styles, transforms)
    }

    pub fn with_processors(
        processors: ProcessorRegistry,
        styles: StyleRegistry,
        transforms: TransformRegistry,
    ) -> Self {
        Converter {
            processors,
            styles,
            transforms,
        }
    }

    /// Highlighter painting in the code font of `styles`, at `font_size`.
    pub fn highlighter(
        styles: &StyleRegistry,
        stylesheet: StyleSheet,
        font_size: f32,
    ) -> SyntaxHighlighter {
        let font = styles
            .resolve(CODE_FONT)
            .unwrap_or_else(|| styles.default_font())
            .with_size(font_size);
        SyntaxHighlighter::new(font, stylesheet)
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn processors(&self) -> &ProcessorRegistry {
        &self.processors
    }

    /// Converts the tree under `root` with a fresh render context.
    pub fn convert(&self, root: &Node) -> Result<Vec<Element>, ConversionError> {
        let mut inv = Invocation::new(&self.processors, &self.styles, &self.transforms);
        let tree = inv.process(0, root)?;
        inv.finish()?;
        Ok(tree)
    }

    /// Parses `text` as Markdown and converts it.
    pub fn convert_markdown(&self, text: &str) -> Result<Vec<Element>, ConversionError> {
        self.convert(&Markdown::new(text).parse())
    }
}

impl Default for Converter {
    fn default() -> Self {
        let styles = StyleRegistry::with_defaults();
        let highlighter =
            Converter::highlighter(&styles, StyleSheet::default(), HIGHLIGHT_FONT_SIZE);
        let transforms = TransformRegistry::with_defaults(highlighter, DiagramSettings::default());
        Converter::new(styles, transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[test]
    fn converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }

    #[test]
    fn content_before_the_first_header_stays_top_level() {
        let tree = Converter::default()
            .convert_markdown("intro\n\n# A\n\nbody\n")
            .expect("converts");
        let kinds: Vec<_> = tree.iter().map(Element::kind).collect();
        assert_eq!(kinds, vec!["Paragraph", "Chapter"]);
        assert_eq!(tree[1].children().len(), 1);
    }

    #[test]
    fn custom_processor_replaces_the_default() {
        struct Shout;
        impl crate::processor::Processor for Shout {
            fn process(
                &self,
                _: usize,
                node: &Node,
                inv: &mut Invocation<'_>,
            ) -> Result<Vec<Element>, ConversionError> {
                let text = node.raw_text().unwrap_or_default().to_uppercase();
                Ok(vec![Element::run(text, inv.current_font().clone())])
            }
        }

        let mut processors = ProcessorRegistry::with_defaults();
        processors.register(crate::ast::NodeVariant::Text, Box::new(Shout));
        let base = Converter::default();
        let highlighter = base.transforms().highlighter().clone();
        let converter = Converter::with_processors(
            processors,
            base.styles().clone(),
            TransformRegistry::new(highlighter),
        );

        let tree = converter
            .convert(&Node::root(vec![Node::new(
                NodeKind::Container,
                vec![Node::text("hey")],
            )]))
            .expect("converts");
        assert_eq!(tree[0].text(), "HEY");
    }
}
