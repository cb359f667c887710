//! Document tree model.
//!
//! This module contains:
//! - Node kinds and reference labels
//! - The arena-backed document tree
//! - The label/anchor index used to resolve cross references
//! - JSON loading of trees produced by an external parser (`json` feature)

mod anchors;
#[cfg(feature = "json")]
mod json;
mod node;
mod tree;

pub use anchors::{AnchorIndex, AnchorIndexBuilder, DEFAULT_ANCHOR_PREFIX, method_label};
pub use node::{Label, Node, NodeId, NodeKind, TextRange};
pub use tree::{ChildIter, DfsIter, DocTree};
