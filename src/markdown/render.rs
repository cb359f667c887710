//! Core document tree → Markdown rendering.
//!
//! Rendering is a strict post-order walk: every child is rendered to a string
//! first, then the parent's rule composes those strings into its own text.
//! No I/O is performed here, and nothing survives a pass except the returned
//! string.

use crate::error::{Error, Result};
use crate::model::{AnchorIndex, DocTree, NodeId, NodeKind};

use super::compact::is_compact;
use super::escape::{calculate_fence_length, render_literal};
use super::list::format_item;
use super::reference::resolve_reference;
use super::sniff::sniff_language;

/// Text emitted in place of a footnote. Footnotes are not rendered yet.
pub const FOOTNOTE_PLACEHOLDER: &str = "FIXME";

/// Deepest headline level RD can express.
pub const MAX_HEADLINE_LEVEL: u8 = 6;

/// Marker in front of unordered list items.
const ITEM_MARKER: &str = "* ";

/// Marker in front of description and method item bodies.
const DESCRIPTION_MARKER: &str = ":   ";

/// Configuration for Markdown rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Put an `<a id="..."></a>` target in front of anchored headline titles.
    pub emit_anchors: bool,
    /// Deepest tree nesting accepted before failing.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            emit_anchors: false,
            max_depth: 128,
        }
    }
}

/// Renders document trees to Markdown.
///
/// A `Renderer` holds only configuration. Every call to [`Renderer::render`]
/// starts from fresh state, so one renderer can be shared between threads.
///
/// # Example
///
/// ```
/// use rd2md::markdown::Renderer;
/// use rd2md::model::{AnchorIndex, DocTree, NodeId};
///
/// let mut tree = DocTree::new();
/// tree.add_headline(NodeId::ROOT, 1, "Title");
/// tree.add_text_block(NodeId::ROOT, "Hello");
///
/// let anchors = AnchorIndex::build(&tree, "label-");
/// let markdown = Renderer::new().render(&tree, &anchors).unwrap();
/// assert_eq!(markdown, "# Title\n\nHello\n\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new Renderer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with the specified configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a whole document.
    ///
    /// Returns the complete Markdown text, or an error if the tree is
    /// structurally invalid. Output is never partial.
    pub fn render(&self, tree: &DocTree, anchors: &AnchorIndex) -> Result<String> {
        RenderContext::new(tree, anchors, &self.config).render()
    }
}

/// Render a document with the default configuration.
pub fn render_document(tree: &DocTree, anchors: &AnchorIndex) -> Result<String> {
    Renderer::new().render(tree, anchors)
}

/// State for a single render pass.
struct RenderContext<'a> {
    tree: &'a DocTree,
    anchors: &'a AnchorIndex,
    config: &'a RenderConfig,
    /// One counter per enumerated list currently open, innermost last.
    ordinals: Vec<usize>,
}

impl<'a> RenderContext<'a> {
    fn new(tree: &'a DocTree, anchors: &'a AnchorIndex, config: &'a RenderConfig) -> Self {
        Self {
            tree,
            anchors,
            config,
            ordinals: Vec::new(),
        }
    }

    fn render(mut self) -> Result<String> {
        tracing::debug!(nodes = self.tree.node_count(), "rendering document");
        let output = self.walk(NodeId::ROOT, 0)?;
        tracing::debug!(bytes = output.len(), "rendered document");
        Ok(output)
    }

    fn walk(&mut self, id: NodeId, depth: usize) -> Result<String> {
        if depth > self.config.max_depth {
            return Err(Error::TooDeep {
                node: id,
                limit: self.config.max_depth,
            });
        }

        let tree = self.tree;
        let node = tree.node(id).ok_or(Error::MissingNode(id))?;

        // Each enumerated list numbers its own items, however deeply nested
        let opens_scope = node.kind == NodeKind::EnumList;
        if opens_scope {
            self.ordinals.push(0);
        }
        let children = self.walk_children(id, depth);
        if opens_scope {
            self.ordinals.pop();
        }

        self.apply(id, &node.kind, children?)
    }

    fn walk_children(&mut self, id: NodeId, depth: usize) -> Result<Vec<String>> {
        let tree = self.tree;
        tree.children(id)
            .map(|child| self.walk(child, depth + 1))
            .collect()
    }

    /// Produce the text of one node from its rendered children.
    fn apply(&mut self, id: NodeId, kind: &NodeKind, children: Vec<String>) -> Result<String> {
        let output = match kind {
            NodeKind::Document => children.concat(),

            NodeKind::Headline(level) => self.render_headline(id, *level, &children)?,

            NodeKind::TextBlock => {
                let content = children.concat();
                if is_compact(self.tree, id) {
                    content.trim().to_string()
                } else {
                    format!("{}\n\n", content.trim_end())
                }
            }

            NodeKind::Verbatim => self.render_verbatim(id),

            NodeKind::ItemList | NodeKind::EnumList | NodeKind::DescList | NodeKind::MethodList => {
                format!("{}\n\n", children.join("\n").trim_end())
            }

            NodeKind::ItemListItem => {
                format!("{ITEM_MARKER}{}", format_item(&children, ITEM_MARKER.len()))
            }

            NodeKind::EnumListItem => {
                let number = self.next_ordinal(id)?;
                let prefix = format!("{number}. ");
                let body = format_item(&children, prefix.len());
                prefix + &body
            }

            NodeKind::DescListItem => self.render_desc_item(id, NodeKind::DescTerm, &children)?,

            NodeKind::MethodListItem => {
                self.render_desc_item(id, NodeKind::MethodTerm, &children)?
            }

            NodeKind::DescTerm | NodeKind::Index => children.concat(),

            NodeKind::MethodTerm | NodeKind::StringElement | NodeKind::Verb => {
                render_literal(self.tree.node_text(id))
            }

            NodeKind::Emphasis => format!("*{}*", children.concat()),

            NodeKind::Code | NodeKind::Var | NodeKind::Keyboard => {
                format!("`{}`", children.concat())
            }

            NodeKind::Reference(label) => {
                resolve_reference(label, &children.concat(), self.anchors)
            }

            NodeKind::Footnote => {
                tracing::warn!(node = %id, "footnote rendered as placeholder");
                FOOTNOTE_PLACEHOLDER.to_string()
            }
        };

        Ok(output)
    }

    fn render_headline(&self, id: NodeId, level: u8, children: &[String]) -> Result<String> {
        if !(1..=MAX_HEADLINE_LEVEL).contains(&level) {
            return Err(Error::malformed(
                id,
                format!("headline level {level} outside 1..={MAX_HEADLINE_LEVEL}"),
            ));
        }

        let marker = "#".repeat(level as usize);
        let title = children.concat();
        let title = title.trim();

        match self.anchors.anchor_of(id) {
            Some(anchor) if self.config.emit_anchors => {
                Ok(format!("{marker} <a id=\"{anchor}\"></a>{title}\n\n"))
            }
            _ => Ok(format!("{marker} {title}\n\n")),
        }
    }

    fn render_verbatim(&self, id: NodeId) -> String {
        let text = self.tree.node_text(id);
        let lang = sniff_language(text.lines()).unwrap_or("");
        let body = text.trim_end();
        let fence = "`".repeat(calculate_fence_length(body));
        format!("{fence}{lang}\n{body}\n{fence}\n\n")
    }

    fn render_desc_item(
        &self,
        id: NodeId,
        term_kind: NodeKind,
        children: &[String],
    ) -> Result<String> {
        let first = self.tree.children(id).next();
        if first.and_then(|child| self.tree.kind(child)) != Some(&term_kind) {
            return Err(Error::malformed(
                id,
                format!("list item does not start with a {term_kind:?}"),
            ));
        }

        let Some((term, description)) = children.split_first() else {
            return Err(Error::malformed(id, "list item has no term"));
        };

        let term = term.trim();
        if description.is_empty() {
            return Ok(term.to_string());
        }

        Ok(format!(
            "{term}\n{DESCRIPTION_MARKER}{}",
            format_item(description, DESCRIPTION_MARKER.len())
        ))
    }

    /// Advance the counter of the enumerated list that owns `item`.
    fn next_ordinal(&mut self, item: NodeId) -> Result<usize> {
        let parent = self.tree.parent(item);
        if parent.and_then(|p| self.tree.kind(p)) != Some(&NodeKind::EnumList) {
            return Err(Error::malformed(
                item,
                "enumerated item outside an enumerated list",
            ));
        }

        let counter = self.ordinals.last_mut().ok_or_else(|| {
            Error::malformed(item, "enumerated item outside an enumerated list")
        })?;
        *counter += 1;
        Ok(*counter)
    }
}
