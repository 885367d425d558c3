//! Content transforms for verbatim blocks
//!
//! A verbatim block carries a language tag and raw text. Transforms turn that text into
//! elements: the syntax highlighter paints tokens as text runs, the diagram transform rasterizes
//! ASCII art into an image.
//!
//! Two traits split the contract:
//!
//! - [`ContentTransform`] never fails. Anything the dispatcher calls directly implements it.
//! - [`FallibleTransform`] may fail. It only reaches the dispatcher wrapped in [`WithFallback`],
//!   which logs the failure and hands the same input to an infallible fallback.
//!
//! The [`TransformRegistry`] keeps transforms in registration order and picks the first one that
//! accepts a block's language. When none does, or the block has no language, the highlighter
//! handles it.
//!
//! ```rust,ignore
//! let mut registry = TransformRegistry::new(highlighter.clone());
//! registry.register(Box::new(WithFallback::new(DiagramTransform::default(), highlighter)));
//!
//! let elements = registry.process(Some("ditaa"), "+--+\n|  |\n+--+");
//! ```

use crate::element::Element;
use crate::error::TransformError;

pub mod diagram;
pub mod highlight;
pub mod stylesheet;

pub use diagram::{DiagramSettings, DiagramTransform};
pub use highlight::SyntaxHighlighter;
pub use stylesheet::StyleSheet;

/// A transform that always produces elements.
pub trait ContentTransform: Send + Sync {
    /// Short name, used in logs and listings.
    fn name(&self) -> &str;

    /// Whether this transform handles blocks tagged `language`.
    fn accepts(&self, language: &str) -> bool;

    /// Converts `code` into elements.
    fn process(&self, language: &str, code: &str) -> Vec<Element>;
}

/// A transform that may fail on malformed input.
pub trait FallibleTransform: Send + Sync {
    fn name(&self) -> &str;

    fn accepts(&self, language: &str) -> bool;

    fn try_process(&self, language: &str, code: &str) -> Result<Vec<Element>, TransformError>;
}

/// Runs a fallible transform, recovering from any failure with `fallback`.
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        WithFallback { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: FallibleTransform, F: ContentTransform> ContentTransform for WithFallback<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn accepts(&self, language: &str) -> bool {
        self.primary.accepts(language)
    }

    fn process(&self, language: &str, code: &str) -> Vec<Element> {
        match self.primary.try_process(language, code) {
            Ok(elements) => elements,
            Err(err) => {
                log::error!(
                    "{} transform failed on `{}` block, falling back to {}: {}",
                    self.primary.name(),
                    language,
                    self.fallback.name(),
                    err
                );
                self.fallback.process(language, code)
            }
        }
    }
}

/// Ordered set of content transforms with the highlighter as the catch-all.
pub struct TransformRegistry {
    transforms: Vec<Box<dyn ContentTransform>>,
    highlighter: SyntaxHighlighter,
}

impl TransformRegistry {
    /// A registry where every block is highlighted.
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        TransformRegistry {
            transforms: Vec::new(),
            highlighter,
        }
    }

    /// Highlighting plus diagrams for `diagram` languages, falling back to highlighting.
    pub fn with_defaults(highlighter: SyntaxHighlighter, diagram: DiagramSettings) -> Self {
        let mut registry = TransformRegistry::new(highlighter.clone());
        registry.register(Box::new(WithFallback::new(
            DiagramTransform::new(diagram),
            highlighter,
        )));
        registry
    }

    /// Adds a transform. Earlier registrations win when several accept a language.
    pub fn register(&mut self, transform: Box<dyn ContentTransform>) {
        self.transforms.push(transform);
    }

    pub fn highlighter(&self) -> &SyntaxHighlighter {
        &self.highlighter
    }

    /// Transform for blocks tagged `language`.
    pub fn find(&self, language: Option<&str>) -> &dyn ContentTransform {
        language
            .and_then(|lang| self.transforms.iter().find(|t| t.accepts(lang)))
            .map(|t| t.as_ref())
            .unwrap_or(&self.highlighter)
    }

    pub fn process(&self, language: Option<&str>, code: &str) -> Vec<Element> {
        let transform = self.find(language);
        log::debug!(
            "verbatim block `{}` handled by {}",
            language.unwrap_or(""),
            transform.name()
        );
        transform.process(language.unwrap_or(""), code)
    }

    /// Names of registered transforms, catch-all last.
    pub fn names(&self) -> Vec<&str> {
        self.transforms
            .iter()
            .map(|t| t.name())
            .chain(std::iter::once(self.highlighter.name()))
            .collect()
    }
}
