//! Label and anchor index.
//!
//! This module provides [`AnchorIndex`], which maps labels to the anchors
//! used as link fragments in rendered output, for the current document and
//! for other documents.

use std::collections::HashMap;

use super::node::{NodeId, NodeKind};
use super::tree::DocTree;

/// Default prefix for generated anchors (`label-0`, `label-1`, ...).
pub const DEFAULT_ANCHOR_PREFIX: &str = "label-";

/// Anchor lookup tables for one render pass.
///
/// Built once per document, either with [`AnchorIndex::build`] or by an
/// external indexer through [`AnchorIndexBuilder`].
///
/// # Example
///
/// ```
/// use rd2md::model::{AnchorIndex, DocTree, NodeId};
///
/// let mut tree = DocTree::new();
/// let headline = tree.add_headline(NodeId::ROOT, 1, "Install");
///
/// let index = AnchorIndex::build(&tree, "label-");
/// assert_eq!(index.lookup("Install"), Some("label-0"));
/// assert_eq!(index.anchor_of(headline), Some("label-0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnchorIndex {
    /// Label → anchor within the current document
    labels: HashMap<String, String>,

    /// Labelable node → its anchor
    nodes: HashMap<NodeId, String>,

    /// (filename, label) → anchor in another document
    external: HashMap<(String, String), String>,
}

impl AnchorIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every labelable node of `tree` in document order.
    ///
    /// Each headline, description item and method item gets the anchor
    /// `<prefix><n>`, counting labelable nodes from zero. When two nodes share
    /// a label, the first one owns it.
    pub fn build(tree: &DocTree, prefix: &str) -> Self {
        let mut builder = AnchorIndexBuilder::new();
        let mut count = 0usize;

        for id in tree.iter_dfs() {
            let Some(label) = element_label(tree, id) else {
                continue;
            };
            builder.add_internal(id, label, format!("{prefix}{count}"));
            count += 1;
        }

        let index = builder.build();
        tracing::debug!(
            labels = index.labels.len(),
            anchors = index.nodes.len(),
            "built anchor index"
        );
        index
    }

    /// Get the anchor for a label in the current document.
    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    /// Get the anchor for a label in another document.
    pub fn lookup_external(&self, filename: &str, label: &str) -> Option<&str> {
        self.external
            .get(&(filename.to_string(), label.to_string()))
            .map(String::as_str)
    }

    /// Get the anchor assigned to a node, if it is labelable.
    pub fn anchor_of(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(String::as_str)
    }

    /// Register an anchor for a label in another document.
    pub fn insert_external(
        &mut self,
        filename: impl Into<String>,
        label: impl Into<String>,
        anchor: impl Into<String>,
    ) {
        self.external
            .insert((filename.into(), label.into()), anchor.into());
    }

    /// Get the number of labels in the current document.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the current document has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Builder for constructing an [`AnchorIndex`] entry by entry.
#[derive(Debug, Default)]
pub struct AnchorIndexBuilder {
    index: AnchorIndex,
}

impl AnchorIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anchor for a labelable node of the current document.
    ///
    /// The node always gets the anchor; the label keeps its first owner.
    pub fn add_internal(&mut self, node: NodeId, label: String, anchor: String) -> &mut Self {
        self.index.nodes.insert(node, anchor.clone());
        self.index.labels.entry(label).or_insert(anchor);
        self
    }

    /// Add an anchor for a label in another document.
    pub fn add_external(&mut self, filename: String, label: String, anchor: String) -> &mut Self {
        self.index.insert_external(filename, label, anchor);
        self
    }

    /// Finish building and return the index.
    pub fn build(self) -> AnchorIndex {
        self.index
    }
}

/// Label carried by a labelable node, or `None` for other kinds.
fn element_label(tree: &DocTree, id: NodeId) -> Option<String> {
    match tree.kind(id)? {
        NodeKind::Headline(_) => Some(tree.plain_text(id)),
        NodeKind::DescListItem => {
            let term = tree.children(id).next()?;
            Some(tree.plain_text(term))
        }
        NodeKind::MethodListItem => {
            let term = tree.children(id).next()?;
            Some(method_label(tree.node_text(term)))
        }
        _ => None,
    }
}

/// Label of a method signature: everything before its parameter list or block.
///
/// `Foo#bar(a, b) {|x| ... }` is labelled `Foo#bar`.
pub fn method_label(signature: &str) -> String {
    let signature = signature.trim();
    let end = signature
        .find(['(', '{', ' ', '\t', '\n'])
        .unwrap_or(signature.len());
    signature[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let index = AnchorIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup("anything"), None);
    }

    #[test]
    fn test_build_numbers_labelable_nodes_in_order() {
        let mut tree = DocTree::new();
        let h1 = tree.add_headline(NodeId::ROOT, 1, "Intro");
        tree.add_text_block(NodeId::ROOT, "not labelled");
        let list = tree.add(NodeId::ROOT, NodeKind::DescList);
        let item = tree.add(list, NodeKind::DescListItem);
        let term = tree.add(item, NodeKind::DescTerm);
        tree.add_string(term, "--verbose");
        let h2 = tree.add_headline(NodeId::ROOT, 2, "Usage");

        let index = AnchorIndex::build(&tree, "label-");

        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("Intro"), Some("label-0"));
        assert_eq!(index.lookup("--verbose"), Some("label-1"));
        assert_eq!(index.lookup("Usage"), Some("label-2"));
        assert_eq!(index.anchor_of(h1), Some("label-0"));
        assert_eq!(index.anchor_of(item), Some("label-1"));
        assert_eq!(index.anchor_of(h2), Some("label-2"));
    }

    #[test]
    fn test_duplicate_label_keeps_first_owner() {
        let mut tree = DocTree::new();
        let first = tree.add_headline(NodeId::ROOT, 2, "Options");
        let second = tree.add_headline(NodeId::ROOT, 2, "Options");

        let index = AnchorIndex::build(&tree, "a");

        assert_eq!(index.lookup("Options"), Some("a0"));
        assert_eq!(index.anchor_of(first), Some("a0"));
        assert_eq!(index.anchor_of(second), Some("a1"));
    }

    #[test]
    fn test_method_items_use_signature_label() {
        let mut tree = DocTree::new();
        let list = tree.add(NodeId::ROOT, NodeKind::MethodList);
        let item = tree.add(list, NodeKind::MethodListItem);
        tree.add_text(item, NodeKind::MethodTerm, "Foo#bar(a, b)");

        let index = AnchorIndex::build(&tree, DEFAULT_ANCHOR_PREFIX);
        assert_eq!(index.lookup("Foo#bar"), Some("label-0"));
    }

    #[test]
    fn test_method_label() {
        assert_eq!(method_label("Foo#bar(a, b)"), "Foo#bar");
        assert_eq!(method_label("Foo.each {|x| ... }"), "Foo.each");
        assert_eq!(method_label("  Foo::VERSION  "), "Foo::VERSION");
        assert_eq!(method_label("function#puts"), "function#puts");
    }

    #[test]
    fn test_builder_external() {
        let mut builder = AnchorIndexBuilder::new();
        builder.add_external(
            "other.rd".to_string(),
            "Setup".to_string(),
            "label-4".to_string(),
        );
        let index = builder.build();

        assert_eq!(index.lookup_external("other.rd", "Setup"), Some("label-4"));
        assert_eq!(index.lookup_external("other.rd", "Missing"), None);
        assert_eq!(index.lookup("Setup"), None);
    }
}
