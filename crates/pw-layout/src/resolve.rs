//! Style resolution over the ancestor chain.
//!
//! Two walks exist and they deliberately differ:
//!
//! * span styles layer each ancestor's style *on top of* the leaf's, so an
//!   outer ancestor that sets a field wins over an inner one;
//! * alignment keeps the last class alignment met while walking from the node
//!   up to the root, so again the farthest ancestor wins.

use log::trace;
use pw_dom::Document;
use pw_dom::NodeId;
use pw_style::ContainerStyle;
use pw_style::StyleRegistry;
use pw_style::TextAlignment;
use pw_style::TextStyle;

static DEFAULT_TEXT_STYLE: TextStyle = TextStyle {
    font_family: None,
    font_size: None,
    font_weight: None,
    italic: None,
    underline: None,
    strikethrough: None,
    color: None,
    background: None,
    line_height: None,
};

/// Resolves registry entries for nodes of one document.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    document: &'a Document,
    registry: &'a StyleRegistry,
}

impl<'a> StyleResolver<'a> {
    pub fn new(document: &'a Document, registry: &'a StyleRegistry) -> Self {
        Self { document, registry }
    }

    /// Tag style (or the default), replaced by each registered class in
    /// declaration order. No merging: the last matching class wins outright.
    pub fn resolve_text_style(&self, node: NodeId) -> &'a TextStyle {
        let document = self.document;
        let mut style = document
            .tag_name(node)
            .and_then(|tag| self.registry.tag_text_style(tag))
            .unwrap_or(&DEFAULT_TEXT_STYLE);

        for class in document.class_names(node) {
            if let Some(class_style) = self.registry.class_text_style(class) {
                style = class_style;
            }
        }

        style
    }

    /// Style of a span emitted for `leaf`: the leaf's own style with every
    /// ancestor's style applied on top, innermost first.
    pub fn resolve_span_style(&self, leaf: NodeId) -> TextStyle {
        let mut composed = TextStyle::default();
        for node in self.document.ancestors(leaf) {
            let layer = self.resolve_text_style(node);
            if !layer.is_empty() {
                composed = composed.apply(layer);
            }
        }
        trace!("span style for {leaf}: {composed:?}");
        composed
    }

    /// Class alignment of `node` or any ancestor; the farthest one wins.
    pub fn resolve_alignment(&self, node: NodeId) -> Option<TextAlignment> {
        let mut resolved = None;
        for current in self.document.ancestors(node) {
            for class in self.document.class_names(current) {
                if let Some(alignment) = self.registry.class_text_alignment(class) {
                    resolved = Some(alignment);
                }
            }
        }
        resolved
    }

    /// Container styles of `node`: the tag entry, then class entries in
    /// declaration order.
    pub fn resolve_container_styles(&self, node: NodeId) -> Vec<ContainerStyle> {
        let mut styles = Vec::new();
        if let Some(style) = self
            .document
            .tag_name(node)
            .and_then(|tag| self.registry.tag_container_style(tag))
        {
            styles.push(style.clone());
        }
        for class in self.document.class_names(node) {
            if let Some(style) = self.registry.class_container_style(class) {
                styles.push(style.clone());
            }
        }
        styles
    }
}
