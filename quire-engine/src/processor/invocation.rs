//! The state of one running conversion.
//!
//! An [`Invocation`] borrows the (read-only) registries and owns a fresh [`RenderContext`].
//! Processors change the context only through scopes: [`Invocation::with_font`],
//! [`Invocation::with_table`] and [`Invocation::with_cell_styler`] push and return a [`Scope`]
//! guard, which pops again when dropped. Early returns through `?` therefore leave the stacks
//! balanced.
//!
//! ```rust,ignore
//! let mut inv = inv.with_font(font);
//! let children = inv.process_children(depth, node)?;
//! // font popped here
//! ```

use super::ProcessorRegistry;
use crate::assemble::assemble;
use crate::ast::{Node, NodeKind, NodeVariant};
use crate::context::{CellStyler, RenderContext, TableInfos};
use crate::element::Element;
use crate::error::ConversionError;
use crate::style::{Font, StyleRegistry};
use crate::transform::TransformRegistry;
use std::ops::{Deref, DerefMut};

pub struct Invocation<'a> {
    processors: &'a ProcessorRegistry,
    styles: &'a StyleRegistry,
    transforms: &'a TransformRegistry,
    context: RenderContext,
}

impl<'a> Invocation<'a> {
    /// A new conversion, with the style registry's default font at the bottom of the font stack.
    pub fn new(
        processors: &'a ProcessorRegistry,
        styles: &'a StyleRegistry,
        transforms: &'a TransformRegistry,
    ) -> Self {
        Invocation {
            processors,
            styles,
            transforms,
            context: RenderContext::new(styles.default_font()),
        }
    }

    pub fn styles(&self) -> &'a StyleRegistry {
        self.styles
    }

    pub fn transforms(&self) -> &'a TransformRegistry {
        self.transforms
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Font currently in effect.
    pub fn current_font(&self) -> &Font {
        self.context.peek_font()
    }

    /// Converts `node` with the processor registered for its variant. At depth 0 the output is
    /// assembled into chapters and sections.
    pub fn process(&mut self, depth: usize, node: &Node) -> Result<Vec<Element>, ConversionError> {
        let processors = self.processors;
        let registered = processors.get(node.variant());
        trace_dispatch(depth, node, registered.is_some());

        let processor = registered.unwrap_or_else(|| processors.fallback());
        let elements = processor.process(depth, node, self)?;

        if depth == 0 {
            Ok(assemble(elements))
        } else {
            Ok(elements)
        }
    }

    /// Processes every child of `node` at `depth + 1`, concatenating their output in order.
    pub fn process_children(
        &mut self,
        depth: usize,
        node: &Node,
    ) -> Result<Vec<Element>, ConversionError> {
        let mut elements = Vec::new();
        for child in node.children() {
            elements.extend(self.process(depth + 1, child)?);
        }
        Ok(elements)
    }

    pub fn with_font(&mut self, font: Font) -> Scope<'_, 'a> {
        self.context.push_font(font);
        Scope::new(self, ScopeKind::Font)
    }

    /// Opens `table`. Take it back with [`Scope::take_table`] once its rows are processed.
    pub fn with_table(&mut self, table: TableInfos) -> Scope<'_, 'a> {
        self.context.push_table(table);
        Scope::new(self, ScopeKind::Table)
    }

    pub fn with_cell_styler(&mut self, styler: CellStyler) -> Scope<'_, 'a> {
        self.context.push_cell_styler(styler);
        Scope::new(self, ScopeKind::CellStyler)
    }

    /// The open table, on behalf of `processor`.
    pub fn table(&self, processor: NodeVariant) -> Result<&TableInfos, ConversionError> {
        self.context.peek_table(processor)
    }

    pub fn table_mut(&mut self, processor: NodeVariant) -> Result<&mut TableInfos, ConversionError> {
        self.context.peek_table_mut(processor)
    }

    pub fn cell_styler(&self, processor: NodeVariant) -> Result<&CellStyler, ConversionError> {
        self.context.peek_cell_styler(processor)
    }

    /// Ends the conversion, checking that every scope was released.
    pub fn finish(self) -> Result<(), ConversionError> {
        self.context.ensure_balanced()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Font,
    Table,
    CellStyler,
}

/// Guard over one pushed context entry. Dereferences to the [`Invocation`] and pops the entry
/// when dropped.
pub struct Scope<'s, 'a> {
    inv: &'s mut Invocation<'a>,
    kind: ScopeKind,
    released: bool,
}

impl<'s, 'a> Scope<'s, 'a> {
    fn new(inv: &'s mut Invocation<'a>, kind: ScopeKind) -> Self {
        Scope {
            inv,
            kind,
            released: false,
        }
    }

    /// Closes a table scope, returning the filled table.
    pub fn take_table(mut self) -> Result<TableInfos, ConversionError> {
        if self.kind != ScopeKind::Table {
            return Err(ConversionError::TableStackUnderflow);
        }
        self.released = true;
        self.inv.context.pop_table()
    }
}

impl<'a> Deref for Scope<'_, 'a> {
    type Target = Invocation<'a>;

    fn deref(&self) -> &Invocation<'a> {
        &*self.inv
    }
}

impl<'a> DerefMut for Scope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Invocation<'a> {
        &mut *self.inv
    }
}

impl Drop for Scope<'_, '_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let context = &mut self.inv.context;
        // the guard owns exactly one entry, pushed in its constructor
        let popped = match self.kind {
            ScopeKind::Font => context.pop_font().map(drop),
            ScopeKind::Table => context.pop_table().map(drop),
            ScopeKind::CellStyler => context.pop_cell_styler().map(drop),
        };
        if let Err(err) = popped {
            log::error!("scope release failed: {err}");
        }
    }
}

/// Logs the dispatch of `node`: indented by depth, `*` when a registered processor handles it.
fn trace_dispatch(depth: usize, node: &Node, registered: bool) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    let marker = if registered { '*' } else { ' ' };
    let detail = match &node.kind {
        NodeKind::Header { level } => format!(" L:{level}"),
        NodeKind::Verbatim { language, .. } => {
            format!(" T:{}", language.as_deref().unwrap_or_default())
        }
        _ => String::new(),
    };
    log::trace!(
        "{}{}{}{}",
        "    ".repeat(depth),
        marker,
        node.variant(),
        detail
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AlternateTableRowBackground;
    use crate::style::{Color, FontStyle};
    use crate::transform::{StyleSheet, SyntaxHighlighter};

    fn registries() -> (ProcessorRegistry, StyleRegistry, TransformRegistry) {
        let highlighter = SyntaxHighlighter::new(Font::default(), StyleSheet::default());
        (
            ProcessorRegistry::with_defaults(),
            StyleRegistry::with_defaults(),
            TransformRegistry::new(highlighter),
        )
    }

    #[test]
    fn font_scope_pops_on_drop() {
        let (processors, styles, transforms) = registries();
        let mut inv = Invocation::new(&processors, &styles, &transforms);
        let bold = inv.current_font().with_style(FontStyle::BOLD);
        {
            let scope = inv.with_font(bold.clone());
            assert_eq!(scope.current_font(), &bold);
            assert_eq!(scope.context().depths().fonts, 2);
        }
        assert_eq!(inv.context().depths().fonts, 1);
        assert!(inv.finish().is_ok());
    }

    #[test]
    fn scope_pops_on_early_return() {
        fn failing(inv: &mut Invocation<'_>) -> Result<(), ConversionError> {
            let scope = inv.with_cell_styler(CellStyler::body(Font::default()));
            scope.table(NodeVariant::TableCell)?;
            Ok(())
        }

        let (processors, styles, transforms) = registries();
        let mut inv = Invocation::new(&processors, &styles, &transforms);
        assert_eq!(
            failing(&mut inv),
            Err(ConversionError::NoOpenTable {
                processor: NodeVariant::TableCell
            })
        );
        assert_eq!(inv.context().depths().cell_stylers, 0);
    }

    #[test]
    fn take_table_releases_the_scope() {
        let (processors, styles, transforms) = registries();
        let mut inv = Invocation::new(&processors, &styles, &transforms);
        let policy = AlternateTableRowBackground::new(Color::VERY_LIGHT_GRAY);
        let scope = inv.with_table(TableInfos::new(3, policy));
        let table = scope.take_table().expect("table scope");
        assert_eq!(table.columns(), 3);
        assert_eq!(inv.context().depths().tables, 0);
    }

    #[test]
    fn take_table_on_other_scope_fails_and_still_pops() {
        let (processors, styles, transforms) = registries();
        let mut inv = Invocation::new(&processors, &styles, &transforms);
        let scope = inv.with_font(Font::default());
        assert_eq!(
            scope.take_table().unwrap_err(),
            ConversionError::TableStackUnderflow
        );
        assert!(inv.finish().is_ok());
    }

    #[test]
    fn unregistered_variant_passes_children_through() {
        let (processors, styles, transforms) = registries();
        let mut inv = Invocation::new(&processors, &styles, &transforms);
        let node = Node::new(
            NodeKind::Container,
            vec![Node::text("a"), Node::text("b")],
        );
        let elements = inv.process(1, &node).expect("converts");
        let texts: Vec<_> = elements.iter().map(Element::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(elements.iter().all(|e| matches!(e, Element::Run(_))));
    }
}
