//! Markdown input
//!
//! # Library Choice
//!
//! Parsing is delegated to `comrak`: CommonMark compliant, with the table, strikethrough,
//! autolink and tasklist extensions the converter understands.
//!
//! # Node Mapping
//!
//! | Markdown               | Node                                   | Notes                                 |
//! |------------------------|----------------------------------------|---------------------------------------|
//! | Heading (# ## ###)     | `Header { level }`                     | Flat; nesting is rebuilt on output    |
//! | Paragraph              | `Paragraph`                            |                                       |
//! | Code block (```)       | `Verbatim { language, text }`          | First word of the info string         |
//! | `code`                 | `InlineCode`                           |                                       |
//! | List (- or 1.)         | `BulletList` / `OrderedList`           | Task items become plain list items    |
//! | Table                  | `Table { columns }`                    | Rows regrouped into header / body     |
//! | *em* **strong** ~~x~~  | `Emphasis` / `Strong` / `Strike`       |                                       |
//! | \[text\](url)          | `Link { url }`                         |                                       |
//! | !\[alt\](src)          | `Container` of the alt text            | Images are not fetched                |
//! | ---                    | `Simple(HRule)`                        |                                       |
//! | ’ … — – nbsp           | `Simple(..)`                           | Produced by smart punctuation         |
//! | Raw HTML, front matter | dropped                                |                                       |

use crate::ast::Node;
use crate::error::SourceError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod parser;

/// Raw Markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markdown {
    raw: String,
}

impl Markdown {
    pub fn new(raw: impl Into<String>) -> Self {
        Markdown { raw: raw.into() }
    }

    /// Reads the whole of `reader`, which must be UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SourceError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Markdown::new(String::from_utf8(bytes)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Markdown::from_reader(File::open(path)?)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parses the text into a syntax tree rooted at a `Root` node.
    pub fn parse(&self) -> Node {
        parser::parse(&self.raw)
    }
}
