//! Markdown to document element trees
//!
//!     This crate converts a parsed Markdown document into a tree of abstract document elements
//!     (styled text runs, paragraphs, sections, tables, images, icon symbols) that a page layout
//!     backend can paint. It never paints anything itself, and never touches a shell: reading
//!     files, printing and configuration belong to quire-cli and quire-config.
//!
//! Architecture
//!
//!     The conversion is a depth first walk over the syntax tree:
//!
//!     - Every node variant is handled by a Processor (./processor/mod.rs), looked up in the
//!       ProcessorRegistry by variant. Unregistered variants pass their children's output through.
//!     - Processors share the state of the running conversion through an Invocation: the
//!       StyleRegistry (named fonts and colors), the TransformRegistry (verbatim block handlers)
//!       and the RenderContext (font, table and cell styler stacks).
//!     - Context state is only ever pushed through scope guards, which pop on every exit path.
//!     - Headers produce standalone sections. The flat output of the document root is nested into
//!       chapters and sections by the TreeAssembler (./assemble.rs).
//!
//!     The file structure :
//!     .
//!     ├── ast.rs                  # Markdown syntax tree
//!     ├── element.rs              # Output elements
//!     ├── style                   # Colors, fonts, StyleRegistry
//!     ├── context.rs              # RenderContext stacks, table state, cell stylers
//!     ├── processor               # Processor trait, registry, per-node processors
//!     ├── assemble.rs             # Chapter / section reassembly
//!     ├── transform               # Highlighting, diagrams, fallback wrapper
//!     ├── source                  # Markdown input through comrak
//!     ├── symbols.rs              # Icon font glyphs
//!     ├── treeviz.rs              # Tree dump of the output
//!     ├── convert.rs              # Converter facade
//!     └── error.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <area>.rs
//!
//!     Rust does not discover tests in subdirectories, so lib.rs lists the modules.
//!
//! Content Transforms
//!
//!     Verbatim blocks go to the first registered transform accepting their language tag, or to
//!     the syntax highlighter when none does. Diagram rendering is fallible; it is wrapped so that
//!     any failure is logged and the block is highlighted instead. A conversion therefore never
//!     fails because of a block's content, only because of structural misuse (a table cell with
//!     no open table, an unbalanced context).
//!
pub mod assemble;
pub mod ast;
pub mod context;
pub mod convert;
pub mod element;
pub mod error;
pub mod processor;
pub mod source;
pub mod style;
pub mod symbols;
pub mod transform;
pub mod treeviz;

pub use ast::{Node, NodeKind, NodeVariant};
pub use convert::Converter;
pub use element::Element;
pub use error::{ConversionError, SourceError, TransformError};
pub use source::Markdown;
pub use style::StyleRegistry;
