//! Markdown conversion tests
//!
//! Documents go through the comrak parser and the default converter, and are checked on the
//! resulting element tree.

mod import;
mod transforms;
mod treeviz;
