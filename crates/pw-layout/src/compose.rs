//! Line composition: one run of sibling-adjacent nodes into one paragraph.

use crate::context::ListMarker;
use crate::context::find_list_item_or_block_ancestor;
use crate::context::ordinal_in_list;
use crate::resolve::StyleResolver;
use log::debug;
use log::trace;
use pw_dom::Document;
use pw_dom::NodeId;
use pw_dom::classify::is_hidden;
use pw_dom::classify::is_line_break;
use pw_style::StyleRegistry;
use pw_style::TextAlignment;
use pw_style::TextStyle;
use serde::Serialize;

/// Minimum width of the marker column, in points.
pub const MARKER_MIN_WIDTH: f32 = 26.0;

const BULLET: &str = "\u{2022}  ";

/// Prefix cell rendered before a list item's content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub text: String,
    pub kind: ListMarker,
    pub min_width: f32,
    pub vertical_padding: f32,
}

impl Marker {
    fn for_list(kind: ListMarker, vertical_padding: f32) -> Option<Self> {
        let text = match kind {
            ListMarker::None => return None,
            ListMarker::Bullet => BULLET.to_owned(),
            ListMarker::Ordinal(number) => format!("{number}. "),
        };
        Some(Self {
            text,
            kind,
            min_width: MARKER_MIN_WIDTH,
            vertical_padding,
        })
    }
}

/// A run of text sharing one resolved style. A line break is a span whose
/// text is `"\n"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledSpan {
    #[serde(skip)]
    pub source: NodeId,
    pub text: String,
    pub style: TextStyle,
}

impl StyledSpan {
    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

/// A composed paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedLine {
    /// List item or block the line belongs to.
    #[serde(skip)]
    pub context: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
    pub spans: Vec<StyledSpan>,
}

impl ComposedLine {
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Text leaves whose outer edges are trimmed while emitting one line.
#[derive(Debug, Clone, Copy)]
struct EdgeTrim {
    leading: Option<NodeId>,
    trailing: Option<NodeId>,
}

impl EdgeTrim {
    fn for_line(doc: &Document, first: NodeId, last: NodeId) -> Self {
        Self {
            leading: edge_text_leaf(doc, first, Edge::Leading),
            trailing: edge_text_leaf(doc, last, Edge::Trailing),
        }
    }

    fn apply<'t>(&self, leaf: NodeId, text: &'t str) -> &'t str {
        let mut view = text;
        if self.leading == Some(leaf) {
            view = view.trim_start();
        }
        if self.trailing == Some(leaf) {
            view = view.trim_end();
        }
        view
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
}

/// Follows first (or last) children down from `node` to a text leaf.
fn edge_text_leaf(doc: &Document, node: NodeId, edge: Edge) -> Option<NodeId> {
    let mut current = node;
    loop {
        if doc.is_text(current) {
            return Some(current);
        }
        let children = doc.children(current);
        current = match edge {
            Edge::Leading => *children.first()?,
            Edge::Trailing => *children.last()?,
        };
    }
}

/// Turns line node runs into [`ComposedLine`]s.
#[derive(Debug, Clone, Copy)]
pub struct LineComposer<'a> {
    document: &'a Document,
    registry: &'a StyleRegistry,
    resolver: StyleResolver<'a>,
}

impl<'a> LineComposer<'a> {
    pub fn new(document: &'a Document, registry: &'a StyleRegistry) -> Self {
        Self {
            document,
            registry,
            resolver: StyleResolver::new(document, registry),
        }
    }

    pub fn resolver(&self) -> StyleResolver<'a> {
        self.resolver
    }

    /// Composes `nodes`, an ordered run of siblings making up one line.
    ///
    /// Returns `None` for an empty run or when the first node sits under
    /// neither a list item nor a block. The document is never modified.
    pub fn compose(&self, nodes: &[NodeId]) -> Option<ComposedLine> {
        let (&first, &last) = (nodes.first()?, nodes.last()?);
        let Some(context) = find_list_item_or_block_ancestor(self.document, first) else {
            debug!("dropping line starting at {first}: no list item or block ancestor");
            return None;
        };

        let marker = Marker::for_list(
            ordinal_in_list(self.document, context),
            self.registry.list_vertical_padding(),
        );
        let alignment = self.resolver.resolve_alignment(context);
        let trim = EdgeTrim::for_line(self.document, first, last);

        let mut spans = Vec::new();
        for &node in nodes {
            self.emit(node, trim, &mut spans);
        }
        trace!(
            "composed line in {context}: {} node(s), {} span(s)",
            nodes.len(),
            spans.len()
        );

        Some(ComposedLine {
            context,
            marker,
            alignment,
            spans,
        })
    }

    fn emit(&self, node: NodeId, trim: EdgeTrim, spans: &mut Vec<StyledSpan>) {
        let doc = self.document;
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(text) = doc.text(current) {
                spans.push(StyledSpan {
                    source: current,
                    text: trim.apply(current, text).to_owned(),
                    style: self.resolver.resolve_span_style(current),
                });
            } else if is_line_break(doc, current) {
                spans.push(StyledSpan {
                    source: current,
                    text: "\n".to_owned(),
                    style: self.resolver.resolve_span_style(current),
                });
            } else if !is_hidden(doc, current) {
                stack.extend(doc.children(current).iter().rev().copied());
            }
        }
    }
}
