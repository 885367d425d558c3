//! Engine tests on hand-built syntax trees.

mod dispatch;
mod properties;
