//! Paragraph context and list position lookups.

use pw_dom::Document;
use pw_dom::NodeId;
use pw_dom::classify::is_block;
use pw_dom::classify::is_list;
use pw_dom::classify::is_list_item;
use pw_dom::classify::is_ordered_list;
use serde::Serialize;

/// What a line's context contributes as a list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "number")]
pub enum ListMarker {
    None,
    Bullet,
    /// 1-based position among the `li` children of an ordered list.
    Ordinal(usize),
}

/// Nearest `li` at or above `node`, unless a `ul`/`ol` is met first;
/// otherwise the nearest block at or above `node`.
pub fn find_list_item_or_block_ancestor(doc: &Document, node: NodeId) -> Option<NodeId> {
    find_list_item(doc, node).or_else(|| find_block(doc, node))
}

fn find_list_item(doc: &Document, node: NodeId) -> Option<NodeId> {
    for current in doc.ancestors(node) {
        if is_list(doc, current) {
            return None;
        }
        if is_list_item(doc, current) {
            return Some(current);
        }
    }
    None
}

fn find_block(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.ancestors(node).find(|&current| is_block(doc, current))
}

/// Marker for `node` based on its immediate parent list only.
pub fn ordinal_in_list(doc: &Document, node: NodeId) -> ListMarker {
    if !is_list_item(doc, node) {
        return ListMarker::None;
    }
    let Some(list) = doc.parent(node).filter(|&parent| is_list(doc, parent)) else {
        return ListMarker::None;
    };
    if !is_ordered_list(doc, list) {
        return ListMarker::Bullet;
    }

    let position = doc
        .children(list)
        .iter()
        .filter(|&&sibling| is_list_item(doc, sibling))
        .position(|&sibling| sibling == node);
    match position {
        Some(index) => ListMarker::Ordinal(index + 1),
        None => ListMarker::None,
    }
}
