//! Pure Markdown generation from RD document trees.
//!
//! This module renders a parsed [`DocTree`](crate::model::DocTree) to
//! Markdown text. The pieces are small pure functions composed by the
//! renderer:
//!
//! - [`escape`]: entity escaping and line unwrapping for literal text
//! - [`reference`]: URL, in-document and cross-document link resolution
//! - [`list`]: continuation indentation for list item bodies
//! - [`sniff`]: language guessing for verbatim blocks
//! - [`compact`]: tight list item detection
//! - [`render`]: the per-node rendering rules
//!
//! ## Design Notes
//!
//! - **Post-order composition**: each rule receives its children already
//!   rendered to strings and never looks at the raw subtree, except for the
//!   position queries of the compactness check.
//! - **Scoped numbering**: every enumerated list owns its counter, so nested
//!   numbered lists do not disturb each other.
//! - **Footnotes**: rendered as a fixed placeholder, not yet supported.

mod compact;
mod escape;
mod list;
mod reference;
mod render;
mod sniff;

pub use compact::is_compact;
pub use escape::{calculate_fence_length, escape_metachars, merge_lines, render_literal};
pub use list::{CODE_INDENT, FENCE, format_item, is_fenced_block};
pub use reference::resolve_reference;
pub use render::{
    FOOTNOTE_PLACEHOLDER, MAX_HEADLINE_LEVEL, RenderConfig, Renderer, render_document,
};
pub use sniff::sniff_language;
