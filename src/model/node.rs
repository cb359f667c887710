//! Document tree node types and kinds.

use std::fmt;

/// Unique identifier for a node within a [`DocTree`](super::DocTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Target of a [`NodeKind::Reference`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// An external URL, written `<URL:...>` in the source.
    Url(String),
    /// A labelled element. Without a filename it points into the current
    /// document, with one it points into another document.
    RdLabel {
        element_label: String,
        filename: Option<String>,
    },
}

impl Label {
    /// Label pointing at an element of the current document.
    pub fn internal(element_label: impl Into<String>) -> Self {
        Label::RdLabel {
            element_label: element_label.into(),
            filename: None,
        }
    }

    /// Label pointing at an element of another document.
    pub fn external(filename: impl Into<String>, element_label: impl Into<String>) -> Self {
        Label::RdLabel {
            element_label: element_label.into(),
            filename: Some(filename.into()),
        }
    }
}

/// Kind of a node.
///
/// The set is closed: the renderer matches on it exhaustively, so adding a
/// kind means adding a rendering rule.
///
/// Block kinds:
/// - Document, Headline, TextBlock, Verbatim
/// - ItemList, EnumList, DescList, MethodList and their items
///
/// Inline kinds:
/// - StringElement, Verb (literal text in the text buffer)
/// - Emphasis, Code, Var, Keyboard, Index (wrappers)
/// - Reference, Footnote
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Root of the tree.
    #[default]
    Document,
    /// Section heading with level 1-6.
    Headline(u8),
    /// Paragraph of inline content.
    TextBlock,
    /// Literal lines, stored in the text buffer with trailing line feeds.
    Verbatim,
    /// Bulleted list (`*` in RD).
    ItemList,
    /// Numbered list (`(1)` in RD).
    EnumList,
    /// Description list (`:` in RD).
    DescList,
    /// Method list (`---` in RD).
    MethodList,
    ItemListItem,
    EnumListItem,
    /// Description item: a [`NodeKind::DescTerm`] followed by blocks.
    DescListItem,
    /// Method item: a [`NodeKind::MethodTerm`] followed by blocks.
    MethodListItem,
    /// Term of a description item (inline content).
    DescTerm,
    /// Signature of a method item (raw text).
    MethodTerm,
    /// Literal text.
    StringElement,
    /// Emphasized text (`((*...*))`).
    Emphasis,
    /// Code (`(({...}))`).
    Code,
    /// Variable (`((|...|))`).
    Var,
    /// Keyboard input (`((%...%))`).
    Keyboard,
    /// Index term (`((:...:))`).
    Index,
    /// Verbatim inline text (`(('...'))`), never interpreted.
    Verb,
    /// Cross reference (`((<...>))`).
    Reference(Label),
    /// Footnote (`((-...-))`).
    Footnote,
}

impl NodeKind {
    /// Whether this kind is one of the four list containers.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            NodeKind::ItemList | NodeKind::EnumList | NodeKind::DescList | NodeKind::MethodList
        )
    }

    /// Whether this kind is one of the four list items.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            NodeKind::ItemListItem
                | NodeKind::EnumListItem
                | NodeKind::DescListItem
                | NodeKind::MethodListItem
        )
    }

    /// Whether this kind is a description or method term.
    pub fn is_term(&self) -> bool {
        matches!(self, NodeKind::DescTerm | NodeKind::MethodTerm)
    }

    /// Whether nodes of this kind keep their content in the text buffer.
    pub fn has_text(&self) -> bool {
        matches!(
            self,
            NodeKind::StringElement | NodeKind::Verb | NodeKind::Verbatim | NodeKind::MethodTerm
        )
    }
}

/// Range into the tree's text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// Byte offset into the buffer.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextRange {
    /// Create a new text range.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset.
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub kind: NodeKind,
    /// Parent node (None for root).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (append point).
    pub last_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
    /// Text content range (only for kinds with [`NodeKind::has_text`]).
    pub text: TextRange,
}

impl Node {
    /// Create a new node with no text.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            text: TextRange::default(),
        }
    }

    /// Create a node whose content is the given text range.
    pub fn with_text(kind: NodeKind, range: TextRange) -> Self {
        Self {
            text: range,
            ..Self::new(kind)
        }
    }
}
