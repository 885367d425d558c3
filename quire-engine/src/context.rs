//! Mutable rendering state threaded through a conversion.
//!
//! A [`RenderContext`] holds three stacks:
//!
//! - fonts: the font text runs are painted with. The bottom entry is the document default font
//!   and cannot be popped.
//! - tables: the table currently being filled, with its column count, finished rows and
//!   alternating-row background policy.
//! - cell stylers: the policy giving a cell its font and background. Table headers and bodies
//!   each push their own.
//!
//! Processors never push or pop directly: they enter a scope through
//! [`crate::processor::Invocation`], which pops again when the scope is dropped. One context is
//! created per conversion and must be back at its initial depth when the walk completes.

use crate::ast::NodeVariant;
use crate::element::{Table, TableCell, TableRow};
use crate::error::ConversionError;
use crate::style::{Color, Font};

/// Paints every other table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlternateTableRowBackground {
    color: Color,
}

impl AlternateTableRowBackground {
    pub fn new(color: Color) -> Self {
        AlternateTableRowBackground { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Background of the row at `row_index` (0-based, header rows included). Odd rows are painted.
    pub fn background_for(&self, row_index: usize) -> Option<Color> {
        (row_index % 2 == 1).then_some(self.color)
    }
}

/// The table currently being filled.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfos {
    columns: usize,
    rows: Vec<TableRow>,
    current: Option<TableRow>,
    row_background: AlternateTableRowBackground,
}

impl TableInfos {
    pub fn new(columns: usize, row_background: AlternateTableRowBackground) -> Self {
        TableInfos {
            columns,
            rows: Vec::new(),
            current: None,
            row_background,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Index of the row cells are currently added to.
    pub fn row_index(&self) -> usize {
        self.rows.len()
    }

    /// Opens a new row, closing the current one if needed. Returns the new row's index.
    pub fn start_row(&mut self) -> usize {
        self.finish_row();
        self.current = Some(TableRow::default());
        self.rows.len()
    }

    pub fn finish_row(&mut self) {
        if let Some(row) = self.current.take() {
            self.rows.push(row);
        }
    }

    /// Adds a cell to the current row, opening one if none is.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.current.get_or_insert_with(TableRow::default).cells.push(cell);
    }

    /// Background the alternating policy gives the current row.
    pub fn row_background(&self) -> Option<Color> {
        self.row_background.background_for(self.row_index())
    }

    pub fn into_table(mut self) -> Table {
        self.finish_row();
        Table {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

/// How a cell styler picks a cell background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellBackground {
    None,
    Fixed(Color),
    /// Defer to the open table's alternating-row policy.
    Alternating,
}

/// Font and background policy for the cells of a table header or body.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyler {
    font: Font,
    background: CellBackground,
}

impl CellStyler {
    pub fn new(font: Font, background: CellBackground) -> Self {
        CellStyler { font, background }
    }

    /// Header cells: fixed background.
    pub fn header(font: Font, background: Color) -> Self {
        CellStyler::new(font, CellBackground::Fixed(background))
    }

    /// Body cells: zebra striping from the table.
    pub fn body(font: Font) -> Self {
        CellStyler::new(font, CellBackground::Alternating)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn background(&self, table: &TableInfos) -> Option<Color> {
        match self.background {
            CellBackground::None => None,
            CellBackground::Fixed(color) => Some(color),
            CellBackground::Alternating => table.row_background(),
        }
    }
}

/// Depth of each stack, for balance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextDepths {
    pub fonts: usize,
    pub tables: usize,
    pub cell_stylers: usize,
}

#[derive(Debug, Clone)]
pub struct RenderContext {
    default_font: Font,
    fonts: Vec<Font>,
    tables: Vec<TableInfos>,
    cell_stylers: Vec<CellStyler>,
}

impl RenderContext {
    pub fn new(default_font: Font) -> Self {
        RenderContext {
            default_font,
            fonts: Vec::new(),
            tables: Vec::new(),
            cell_stylers: Vec::new(),
        }
    }

    /// Font currently in effect. Falls back to the document default at the bottom of the stack.
    pub fn peek_font(&self) -> &Font {
        self.fonts.last().unwrap_or(&self.default_font)
    }

    pub fn push_font(&mut self, font: Font) {
        self.fonts.push(font);
    }

    pub fn pop_font(&mut self) -> Result<Font, ConversionError> {
        self.fonts.pop().ok_or(ConversionError::FontStackUnderflow)
    }

    pub fn push_table(&mut self, table: TableInfos) {
        self.tables.push(table);
    }

    pub fn pop_table(&mut self) -> Result<TableInfos, ConversionError> {
        self.tables.pop().ok_or(ConversionError::TableStackUnderflow)
    }

    /// The open table, or [`ConversionError::NoOpenTable`] on behalf of `processor`.
    pub fn peek_table(&self, processor: NodeVariant) -> Result<&TableInfos, ConversionError> {
        self.tables
            .last()
            .ok_or(ConversionError::NoOpenTable { processor })
    }

    pub fn peek_table_mut(
        &mut self,
        processor: NodeVariant,
    ) -> Result<&mut TableInfos, ConversionError> {
        self.tables
            .last_mut()
            .ok_or(ConversionError::NoOpenTable { processor })
    }

    pub fn push_cell_styler(&mut self, styler: CellStyler) {
        self.cell_stylers.push(styler);
    }

    pub fn pop_cell_styler(&mut self) -> Result<CellStyler, ConversionError> {
        self.cell_stylers
            .pop()
            .ok_or(ConversionError::CellStylerStackUnderflow)
    }

    pub fn peek_cell_styler(&self, processor: NodeVariant) -> Result<&CellStyler, ConversionError> {
        self.cell_stylers
            .last()
            .ok_or(ConversionError::NoCellStyler { processor })
    }

    /// Depth of each stack. The font depth counts the default font.
    pub fn depths(&self) -> ContextDepths {
        ContextDepths {
            fonts: self.fonts.len() + 1,
            tables: self.tables.len(),
            cell_stylers: self.cell_stylers.len(),
        }
    }

    /// Checks that every pushed scope was popped again.
    pub fn ensure_balanced(&self) -> Result<(), ConversionError> {
        if self.fonts.is_empty() && self.tables.is_empty() && self.cell_stylers.is_empty() {
            Ok(())
        } else {
            Err(ConversionError::UnbalancedContext {
                fonts: self.fonts.len(),
                tables: self.tables.len(),
                cell_stylers: self.cell_stylers.len(),
            })
        }
    }
}
