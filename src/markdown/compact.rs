//! Tight list item detection.

use crate::model::{DocTree, NodeId, NodeKind};

/// Check if a text block should render without its blank-line terminator.
///
/// True when the block sits directly in a list item and is either the only
/// block of that item, or its first block followed by nothing but nested
/// lists. A description or method term is not a block and is ignored.
pub fn is_compact(tree: &DocTree, block: NodeId) -> bool {
    let Some(parent) = tree.parent(block) else {
        return false;
    };
    if !tree.kind(parent).is_some_and(NodeKind::is_list_item) {
        return false;
    }

    let mut blocks = tree
        .children(parent)
        .filter(|&id| !tree.kind(id).is_some_and(NodeKind::is_term));

    if blocks.next() != Some(block) {
        return false;
    }
    blocks.all(|id| tree.kind(id).is_some_and(NodeKind::is_list))
}
