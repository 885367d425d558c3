//! Table processors
//!
//! The table processor opens a [`TableInfos`] for the duration of its children. Header and body
//! processors each put their own [`CellStyler`] in scope. Row and cell processors hold no state:
//! they append to the open table, with the font and background the styler in scope gives them.
//!
//! Row indices count header and body rows together, so body striping continues from the header.

use super::{Invocation, Processor};
use crate::ast::{Node, NodeKind, NodeVariant};
use crate::context::{AlternateTableRowBackground, CellStyler, TableInfos};
use crate::element::{Element, TableCell};
use crate::error::ConversionError;
use crate::style::{
    Color, FontStyle, TABLE_ALTERNATE_BACKGROUND, TABLE_BODY_FONT, TABLE_HEADER_BACKGROUND,
    TABLE_HEADER_FONT,
};

#[derive(Debug, Default)]
pub struct TableProcessor;

impl Processor for TableProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let columns = match node.kind {
            NodeKind::Table { columns } => columns,
            _ => 0,
        };
        let background = inv
            .styles()
            .resolve_color(TABLE_ALTERNATE_BACKGROUND)
            .unwrap_or(Color::VERY_LIGHT_GRAY);
        let policy = AlternateTableRowBackground::new(background);

        let mut scope = inv.with_table(TableInfos::new(columns, policy));
        let stray = scope.process_children(depth, node)?;
        discard_stray(NodeVariant::Table, stray);
        let table = scope.take_table()?;

        Ok(vec![Element::Table(table.into_table())])
    }
}

/// Header cells: bold white on the header background.
#[derive(Debug, Default)]
pub struct TableHeaderProcessor;

impl Processor for TableHeaderProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let styles = inv.styles();
        let font = styles
            .resolve(TABLE_HEADER_FONT)
            .unwrap_or_else(|| inv.current_font().with_color(Color::WHITE))
            .with_style(FontStyle::BOLD);
        let background = styles
            .resolve_color(TABLE_HEADER_BACKGROUND)
            .unwrap_or(Color::BLACK);

        let mut scope = inv.with_cell_styler(CellStyler::header(font, background));
        let stray = scope.process_children(depth, node)?;
        discard_stray(NodeVariant::TableHeader, stray);
        Ok(Vec::new())
    }
}

/// Body cells: body font, striped by the table's alternating-row policy.
#[derive(Debug, Default)]
pub struct TableBodyProcessor;

impl Processor for TableBodyProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let font = inv
            .styles()
            .resolve(TABLE_BODY_FONT)
            .unwrap_or_else(|| inv.current_font().clone());

        let mut scope = inv.with_cell_styler(CellStyler::body(font));
        let stray = scope.process_children(depth, node)?;
        discard_stray(NodeVariant::TableBody, stray);
        Ok(Vec::new())
    }
}

#[derive(Debug, Default)]
pub struct TableRowProcessor;

impl Processor for TableRowProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        inv.table_mut(NodeVariant::TableRow)?.start_row();
        let stray = inv.process_children(depth, node)?;
        discard_stray(NodeVariant::TableRow, stray);
        inv.table_mut(NodeVariant::TableRow)?.finish_row();
        Ok(Vec::new())
    }
}

#[derive(Debug, Default)]
pub struct TableCellProcessor;

impl Processor for TableCellProcessor {
    fn process(
        &self,
        depth: usize,
        node: &Node,
        inv: &mut Invocation<'_>,
    ) -> Result<Vec<Element>, ConversionError> {
        let styler = inv.cell_styler(NodeVariant::TableCell)?.clone();
        let background = styler.background(inv.table(NodeVariant::TableCell)?);
        let font = styler.font().clone();

        let content = {
            let mut scope = inv.with_font(font.clone());
            scope.process_children(depth, node)?
        };
        inv.table_mut(NodeVariant::TableCell)?.add_cell(TableCell {
            content,
            font,
            background,
        });
        Ok(Vec::new())
    }
}

/// Drops elements produced directly inside a table structure, where they have no place.
fn discard_stray(processor: NodeVariant, stray: Vec<Element>) {
    if !stray.is_empty() {
        log::warn!(
            "{processor} dropped {} element(s) outside table cells: {:?}",
            stray.len(),
            stray.iter().map(Element::kind).collect::<Vec<_>>()
        );
    }
}
