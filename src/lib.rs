//! # rd2md
//!
//! Render RD (Ruby Document) trees to Markdown.
//!
//! The crate takes a document tree that an RD parser has already built, plus
//! an index of its labels, and turns it into Markdown text that keeps the
//! document's structure: headlines, paragraphs, the four kinds of RD lists,
//! verbatim blocks, inline markup and cross references.
//!
//! ## Quick Start
//!
//! ```
//! use rd2md::model::{AnchorIndex, DocTree, NodeId, NodeKind};
//! use rd2md::render_document;
//!
//! let mut tree = DocTree::new();
//! tree.add_headline(NodeId::ROOT, 1, "Title");
//! tree.add_text_block(NodeId::ROOT, "Hello");
//! let list = tree.add(NodeId::ROOT, NodeKind::ItemList);
//! for text in ["a", "b"] {
//!     let item = tree.add(list, NodeKind::ItemListItem);
//!     tree.add_text_block(item, text);
//! }
//!
//! let anchors = AnchorIndex::build(&tree, "label-");
//! let markdown = render_document(&tree, &anchors).unwrap();
//! assert_eq!(markdown, "# Title\n\nHello\n\n* a\n* b\n\n");
//! ```
//!
//! ## Loading Trees
//!
//! With the `json` feature, trees can be read from the JSON form emitted by
//! an external parser:
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use rd2md::model::{AnchorIndex, DocTree};
//!
//! let tree = DocTree::from_json(r#"{"type": "Document", "children": [
//!     {"type": "Verbatim", "lines": ["$ rd2md doc.json"]}
//! ]}"#).unwrap();
//! let markdown = rd2md::render_document(&tree, &AnchorIndex::new()).unwrap();
//! assert_eq!(markdown, "```sh\n$ rd2md doc.json\n```\n\n");
//! # }
//! ```

pub mod error;
pub mod markdown;
pub mod model;

pub use error::{Error, Result};
pub use markdown::{RenderConfig, Renderer, render_document};
pub use model::{AnchorIndex, DocTree, Label, NodeId, NodeKind};
