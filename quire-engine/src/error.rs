//! Error types for conversion, content transforms and Markdown input

use crate::ast::NodeVariant;
use thiserror::Error;

/// Structural misuse detected during a conversion.
///
/// These are programming errors rather than bad input: the conversion is aborted instead of
/// producing a tree with corrupted structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A table-scoped processor ran while no table was open
    #[error("{processor:?} processor invoked with no open table")]
    NoOpenTable { processor: NodeVariant },
    /// A cell was processed outside a table header or body
    #[error("{processor:?} processor invoked with no cell styler in scope")]
    NoCellStyler { processor: NodeVariant },
    /// Pop attempted on the font stack when only the default font remained
    #[error("font stack underflow: the document default font cannot be popped")]
    FontStackUnderflow,
    #[error("table stack underflow")]
    TableStackUnderflow,
    #[error("cell styler stack underflow")]
    CellStylerStackUnderflow,
    /// The render context did not return to its initial depth after the walk
    #[error(
        "render context left unbalanced: {fonts} font(s), {tables} table(s), {cell_stylers} cell styler(s) remain"
    )]
    UnbalancedContext {
        fonts: usize,
        tables: usize,
        cell_stylers: usize,
    },
}

/// Failure of a fallible content transform. Always recovered by falling back to highlighting.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("diagram source is empty")]
    EmptyDiagram,
    #[error("invalid character {ch:?} at line {line}, column {column}")]
    InvalidCharacter { line: usize, column: usize, ch: char },
    #[error("diagram of {width}x{height} pixels exceeds the rendering limit")]
    DiagramTooLarge { width: u32, height: u32 },
    #[error("failed to encode diagram image: {0}")]
    Encoding(#[from] image::ImageError),
}

/// Failure to read Markdown input.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read markdown: {0}")]
    Io(#[from] std::io::Error),
    #[error("markdown is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
