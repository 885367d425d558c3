//! Rebuilds the chapter / section hierarchy from the flat output of the document root.
//!
//! # The Algorithm
//!
//! Header processors only ever emit standalone sections; everything that follows a header in
//! document order belongs to it until a header of the same or a shallower level shows up. The
//! assembler walks the flat sequence once, keeping a stack of open sections:
//!
//! 1. **Section:** close every open section at the same or a deeper level, then open the new one.
//!    A [`Element::Chapter`] in the input closes everything.
//! 2. **Content:** attach it to the innermost open section, or to the top level when no section
//!    is open (content before the first header is never orphaned).
//! 3. **Closing:** a closed section becomes a child of the section below it on the stack. When
//!    the stack is empty it is a top-level chapter instead.
//! 4. **Completion:** close whatever is still open.
//!
//! A section that opens with nothing below it on the stack (for instance a document starting
//! with `##`) is therefore promoted to a chapter, so every section stays reachable exactly once.
//!
//! ```text
//! Chapter A, Para x, Section(2) B, Para y   ->   Chapter A
//!                                                ├─ Para x
//!                                                └─ Section B
//!                                                   └─ Para y
//! ```

use crate::element::{Element, Section};

/// Incremental form of [`assemble`].
#[derive(Debug, Default)]
pub struct TreeAssembler {
    tree: Vec<Element>,
    /// Open sections with the level that closes them. Chapters use level 0.
    open: Vec<(usize, Section)>,
}

impl TreeAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        match element {
            Element::Chapter(section) => self.open_section(0, section),
            Element::Section(section) => self.open_section(section.level, section),
            content => match self.open.last_mut() {
                Some((_, section)) => section.children.push(content),
                None => self.tree.push(content),
            },
        }
    }

    fn open_section(&mut self, level: usize, section: Section) {
        while self.open.last().is_some_and(|(open_level, _)| *open_level >= level) {
            self.close();
        }
        self.open.push((level, section));
    }

    fn close(&mut self) {
        if let Some((_, section)) = self.open.pop() {
            match self.open.last_mut() {
                Some((_, parent)) => parent.children.push(Element::Section(section)),
                None => self.tree.push(Element::Chapter(section)),
            }
        }
    }

    pub fn finish(mut self) -> Vec<Element> {
        while !self.open.is_empty() {
            self.close();
        }
        self.tree
    }
}

/// Nests `elements` into chapters and sections.
pub fn assemble(elements: Vec<Element>) -> Vec<Element> {
    let mut assembler = TreeAssembler::new();
    for element in elements {
        assembler.push(element);
    }
    assembler.finish()
}
