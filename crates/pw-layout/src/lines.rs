//! Splits a document into line runs and images, in document order.

use pw_dom::Document;
use pw_dom::NodeId;
use pw_dom::classify::is_block;
use pw_dom::classify::is_hidden;
use pw_dom::classify::is_image;
use pw_dom::classify::is_line_break;
use pw_dom::classify::is_list;
use pw_dom::classify::is_list_item;

/// One unit of flow content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowItem {
    /// Adjacent inline siblings that form one paragraph.
    Line(Vec<NodeId>),
    Image(NodeId),
}

enum Step {
    Enter(NodeId),
    Flush,
}

/// Groups inline siblings into runs. Block boundaries (blocks, lists, list
/// items) and images end the current run; runs without visible text or line
/// breaks are dropped.
pub fn group_lines(doc: &Document) -> Vec<FlowItem> {
    let mut items = Vec::new();
    let mut run = Vec::new();
    let mut stack = vec![Step::Enter(doc.root())];

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Flush => {
                flush(doc, &mut run, &mut items);
                continue;
            }
            Step::Enter(node) => node,
        };

        if is_hidden(doc, node) {
            continue;
        }
        if is_image(doc, node) {
            flush(doc, &mut run, &mut items);
            items.push(FlowItem::Image(node));
            continue;
        }

        let structural = node == doc.root()
            || is_block(doc, node)
            || is_list(doc, node)
            || is_list_item(doc, node);
        if structural {
            flush(doc, &mut run, &mut items);
            stack.push(Step::Flush);
        } else if !contains_flow_boundary(doc, node) {
            run.push(node);
            continue;
        }
        stack.extend(doc.children(node).iter().rev().map(|&child| Step::Enter(child)));
    }

    flush(doc, &mut run, &mut items);
    items
}

fn flush(doc: &Document, run: &mut Vec<NodeId>, items: &mut Vec<FlowItem>) {
    if run.is_empty() {
        return;
    }
    let nodes = std::mem::take(run);
    if nodes.iter().any(|&node| has_visible_content(doc, node)) {
        items.push(FlowItem::Line(nodes));
    }
}

/// Whether an inline subtree holds a block or an image that must split it.
fn contains_flow_boundary(doc: &Document, node: NodeId) -> bool {
    let mut stack = doc.children(node).to_vec();
    while let Some(current) = stack.pop() {
        if is_hidden(doc, current) {
            continue;
        }
        if is_block(doc, current) || is_image(doc, current) {
            return true;
        }
        stack.extend_from_slice(doc.children(current));
    }
    false
}

fn has_visible_content(doc: &Document, node: NodeId) -> bool {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if let Some(text) = doc.text(current) {
            if !text.trim().is_empty() {
                return true;
            }
        } else if is_line_break(doc, current) {
            return true;
        } else if !is_hidden(doc, current) {
            stack.extend_from_slice(doc.children(current));
        }
    }
    false
}
