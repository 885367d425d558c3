//! Abstract document elements handed to the layout backend.
//!
//! Processing produces a flat sequence of elements per node; only the document root's output is
//! reassembled into the chapter / section hierarchy (see [`crate::assemble`]). [`Element::Chapter`]
//! therefore never appears in the output of a non-root node.

use crate::style::{Color, Font};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Run(TextRun),
    Paragraph(Paragraph),
    Section(Section),
    /// A top-level section. Produced only by the tree assembler.
    Chapter(Section),
    List(List),
    ListItem(ListItem),
    BlockQuote(BlockQuote),
    Table(Table),
    Image(Image),
    Symbol(Symbol),
    Rule,
}

/// A run of text painted with a single font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    pub children: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

/// A titled container. Level 1 sections become chapters once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub level: usize,
    pub title: Vec<Element>,
    pub children: Vec<Element>,
}

impl Section {
    pub fn new(level: usize, title: Vec<Element>) -> Self {
        Section {
            level,
            title,
            children: Vec::new(),
        }
    }

    /// Nesting depth below the document root (chapters are at depth 0).
    pub fn depth(&self) -> usize {
        self.level.saturating_sub(1)
    }

    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    /// Marker painted before each item of an unordered list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Symbol>,
    pub items: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListItem {
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BlockQuote {
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub content: Vec<Element>,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

/// An embedded PNG bitmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    #[serde(skip)]
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Scale applied when the image is placed, in percent of its pixel size.
    pub scale_percent: f32,
}

/// An inline icon glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub glyph: char,
    pub size: f32,
    pub color: Color,
}

impl Element {
    pub fn run(text: impl Into<String>, font: Font) -> Element {
        Element::Run(TextRun {
            text: text.into(),
            font,
            background: None,
        })
    }

    pub fn paragraph(children: Vec<Element>) -> Element {
        Element::Paragraph(Paragraph {
            children,
            background: None,
        })
    }

    /// Short name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Run(_) => "Run",
            Element::Paragraph(_) => "Paragraph",
            Element::Section(_) => "Section",
            Element::Chapter(_) => "Chapter",
            Element::List(_) => "List",
            Element::ListItem(_) => "ListItem",
            Element::BlockQuote(_) => "BlockQuote",
            Element::Table(_) => "Table",
            Element::Image(_) => "Image",
            Element::Symbol(_) => "Symbol",
            Element::Rule => "Rule",
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Element::Section(section) | Element::Chapter(section) => Some(section),
            _ => None,
        }
    }

    /// Nested block children. Section titles and table cells are not included.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Paragraph(p) => p.children.as_slice(),
            Element::Section(s) | Element::Chapter(s) => s.children.as_slice(),
            Element::List(l) => l.items.as_slice(),
            Element::ListItem(i) => i.children.as_slice(),
            Element::BlockQuote(q) => q.children.as_slice(),
            Element::Run(_)
            | Element::Table(_)
            | Element::Image(_)
            | Element::Symbol(_)
            | Element::Rule => &[],
        }
    }

    /// Plain text of this element and everything below it.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.text_into(&mut out);
        out
    }

    fn text_into(&self, out: &mut String) {
        match self {
            Element::Run(run) => out.push_str(&run.text),
            Element::Section(s) | Element::Chapter(s) => {
                for title in &s.title {
                    title.text_into(out);
                }
                for child in &s.children {
                    child.text_into(out);
                }
            }
            Element::Table(table) => {
                for cell in table.rows.iter().flat_map(|r| &r.cells) {
                    for element in &cell.content {
                        element.text_into(out);
                    }
                }
            }
            Element::Symbol(symbol) => out.push(symbol.glyph),
            other => {
                for child in other.children() {
                    child.text_into(out);
                }
            }
        }
    }
}

/// Concatenated plain text of a sequence of elements.
pub fn plain_text(elements: &[Element]) -> String {
    elements.iter().map(Element::text).collect()
}
