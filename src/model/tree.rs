//! Arena-backed document tree.

use super::node::{Node, NodeId, NodeKind, TextRange};

/// A parsed RD document.
///
/// The tree uses a parent-pointer / first-child / next-sibling representation
/// stored in a flat arena. Literal text lives in one shared buffer and nodes
/// reference ranges into it.
///
/// # Example
///
/// ```
/// use rd2md::model::{DocTree, NodeId, NodeKind};
///
/// let mut tree = DocTree::new();
/// let para = tree.add(NodeId::ROOT, NodeKind::TextBlock);
/// tree.add_string(para, "Hello");
///
/// assert_eq!(tree.children(NodeId::ROOT).count(), 1);
/// assert_eq!(tree.plain_text(para), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct DocTree {
    /// All nodes in the tree (index 0 is always the root).
    nodes: Vec<Node>,
    /// Global text buffer (nodes reference ranges into this).
    text: String,
}

impl Default for DocTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocTree {
    /// Create a new tree holding only the `Document` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
            text: String::new(),
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get the kind of a node.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append text to the global buffer and return the range.
    pub fn append_text(&mut self, text: &str) -> TextRange {
        let start = self.text.len() as u32;
        self.text.push_str(text);
        TextRange::new(start, text.len() as u32)
    }

    /// Get text from a range.
    pub fn text(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = range.end() as usize;
        self.text.get(start..end).unwrap_or("")
    }

    /// Get the text content of a node (empty for kinds without text).
    pub fn node_text(&self, id: NodeId) -> &str {
        self.node(id).map(|n| self.text(n.text)).unwrap_or("")
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
        }

        let Some(last_child) = self.nodes.get(parent.0 as usize).map(|n| n.last_child) else {
            return;
        };
        match last_child {
            Some(last) => {
                if let Some(last_node) = self.nodes.get_mut(last.0 as usize) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
            parent_node.last_child = Some(child);
        }
    }

    /// Allocate a node of the given kind under `parent`.
    pub fn add(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.alloc_node(Node::new(kind));
        self.append_child(parent, id);
        id
    }

    /// Allocate a text-carrying node of the given kind under `parent`.
    pub fn add_text(&mut self, parent: NodeId, kind: NodeKind, text: &str) -> NodeId {
        let range = self.append_text(text);
        let id = self.alloc_node(Node::with_text(kind, range));
        self.append_child(parent, id);
        id
    }

    /// Add a `StringElement` under `parent`.
    pub fn add_string(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.add_text(parent, NodeKind::StringElement, text)
    }

    /// Add a `TextBlock` holding a single string under `parent`.
    pub fn add_text_block(&mut self, parent: NodeId, text: &str) -> NodeId {
        let block = self.add(parent, NodeKind::TextBlock);
        self.add_string(block, text);
        block
    }

    /// Add a `Headline` with a plain title under `parent`.
    pub fn add_headline(&mut self, parent: NodeId, level: u8, title: &str) -> NodeId {
        let headline = self.add(parent, NodeKind::Headline(level));
        self.add_string(headline, title);
        headline
    }

    /// Add a `Verbatim` block with the given literal lines under `parent`.
    pub fn add_verbatim<S: AsRef<str>>(&mut self, parent: NodeId, lines: &[S]) -> NodeId {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        self.add_text(parent, NodeKind::Verbatim, &content)
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            tree: self,
            current: first_child,
        }
    }

    /// Iterate over all nodes in depth-first order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        DfsIter {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Collect the plain text beneath a node, without markup.
    ///
    /// Used to derive labels from headline titles and terms. Walks with an
    /// explicit stack, so nesting depth is bounded only by memory.
    pub fn plain_text(&self, id: NodeId) -> String {
        let mut result = String::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            if node.kind.has_text() && !node.text.is_empty() {
                result.push_str(self.text(node.text));
            }

            let start = stack.len();
            stack.extend(self.children(current));
            stack[start..].reverse();
        }

        result.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    tree: &'a DocTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .tree
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over all nodes.
pub struct DfsIter<'a> {
    tree: &'a DocTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.tree.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
