//! JSON representation of document trees.
//!
//! The external parser hands trees over as JSON; this module turns that
//! representation into a [`DocTree`] arena.
//!
//! ```json
//! {"type": "Document", "children": [
//!   {"type": "Headline", "level": 1, "children": [
//!     {"type": "StringElement", "text": "Title"}
//!   ]},
//!   {"type": "Verbatim", "lines": ["$ gem install rd2md"]}
//! ]}
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::anchors::AnchorIndex;
use super::node::{Label, NodeId, NodeKind};
use super::tree::DocTree;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum JsonNode {
    Document {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Headline {
        level: u8,
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    TextBlock {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Verbatim {
        #[serde(default)]
        lines: Vec<String>,
    },
    ItemList {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    EnumList {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    DescList {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    MethodList {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    ItemListItem {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    EnumListItem {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    DescListItem {
        #[serde(default)]
        term: Vec<JsonNode>,
        #[serde(default)]
        description: Vec<JsonNode>,
    },
    MethodListItem {
        term: String,
        #[serde(default)]
        description: Vec<JsonNode>,
    },
    StringElement {
        text: String,
    },
    Verb {
        text: String,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Code {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Var {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Keyboard {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Index {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Reference {
        label: JsonLabel,
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    Footnote {
        #[serde(default)]
        children: Vec<JsonNode>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JsonLabel {
    Url(String),
    Rd {
        label: String,
        #[serde(default)]
        filename: Option<String>,
    },
}

impl From<JsonLabel> for Label {
    fn from(label: JsonLabel) -> Self {
        match label {
            JsonLabel::Url(url) => Label::Url(url),
            JsonLabel::Rd { label, filename } => Label::RdLabel {
                element_label: label,
                filename,
            },
        }
    }
}

impl DocTree {
    /// Build a tree from its JSON representation.
    ///
    /// The top-level value must be a `Document` node.
    pub fn from_json(json: &str) -> Result<DocTree> {
        let root: JsonNode = serde_json::from_str(json)?;
        let JsonNode::Document { children } = root else {
            return Err(Error::malformed(
                NodeId::ROOT,
                "top-level node must be a Document",
            ));
        };

        let mut tree = DocTree::new();
        for child in children {
            insert(&mut tree, NodeId::ROOT, child);
        }
        Ok(tree)
    }
}

impl AnchorIndex {
    /// Load external anchors from a `{"file": {"Label": "anchor"}}` map.
    ///
    /// Returns the number of entries added.
    pub fn load_external_json(&mut self, json: &str) -> Result<usize> {
        let files: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut count = 0;
        for (filename, labels) in files {
            for (label, anchor) in labels {
                self.insert_external(filename.clone(), label, anchor);
                count += 1;
            }
        }
        Ok(count)
    }
}

fn insert(tree: &mut DocTree, parent: NodeId, node: JsonNode) {
    let (id, children) = match node {
        JsonNode::Document { children } => (tree.add(parent, NodeKind::Document), children),
        JsonNode::Headline { level, children } => {
            (tree.add(parent, NodeKind::Headline(level)), children)
        }
        JsonNode::TextBlock { children } => (tree.add(parent, NodeKind::TextBlock), children),
        JsonNode::Verbatim { lines } => {
            tree.add_verbatim(parent, &lines);
            return;
        }
        JsonNode::ItemList { children } => (tree.add(parent, NodeKind::ItemList), children),
        JsonNode::EnumList { children } => (tree.add(parent, NodeKind::EnumList), children),
        JsonNode::DescList { children } => (tree.add(parent, NodeKind::DescList), children),
        JsonNode::MethodList { children } => (tree.add(parent, NodeKind::MethodList), children),
        JsonNode::ItemListItem { children } => {
            (tree.add(parent, NodeKind::ItemListItem), children)
        }
        JsonNode::EnumListItem { children } => {
            (tree.add(parent, NodeKind::EnumListItem), children)
        }
        JsonNode::DescListItem { term, description } => {
            let item = tree.add(parent, NodeKind::DescListItem);
            let term_id = tree.add(item, NodeKind::DescTerm);
            for child in term {
                insert(tree, term_id, child);
            }
            (item, description)
        }
        JsonNode::MethodListItem { term, description } => {
            let item = tree.add(parent, NodeKind::MethodListItem);
            tree.add_text(item, NodeKind::MethodTerm, &term);
            (item, description)
        }
        JsonNode::StringElement { text } => {
            tree.add_string(parent, &text);
            return;
        }
        JsonNode::Verb { text } => {
            tree.add_text(parent, NodeKind::Verb, &text);
            return;
        }
        JsonNode::Emphasis { children } => (tree.add(parent, NodeKind::Emphasis), children),
        JsonNode::Code { children } => (tree.add(parent, NodeKind::Code), children),
        JsonNode::Var { children } => (tree.add(parent, NodeKind::Var), children),
        JsonNode::Keyboard { children } => (tree.add(parent, NodeKind::Keyboard), children),
        JsonNode::Index { children } => (tree.add(parent, NodeKind::Index), children),
        JsonNode::Reference { label, children } => (
            tree.add(parent, NodeKind::Reference(label.into())),
            children,
        ),
        JsonNode::Footnote { children } => (tree.add(parent, NodeKind::Footnote), children),
    };

    for child in children {
        insert(tree, id, child);
    }
}
