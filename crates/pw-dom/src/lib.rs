//! DOM tree data structures.
//!
//! Nodes live in an arena owned by [`Document`]. Parent links are plain
//! [`NodeId`]s, so walking upward never involves ownership.

pub mod classify;

use core::fmt;

/// ID used to address nodes in the DOM arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = Self(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .push((name.into().to_ascii_lowercase(), value.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub kind: NodeKind,
}

/// Arena-backed document tree. Node `#0` is always the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn has_content(&self) -> bool {
        !self.children(self.root()).is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Appends an element under `parent`. Unknown parents fall back to the root.
    pub fn append_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        self.push_node(parent, NodeKind::Element(element))
    }

    /// Appends a text node under `parent`. Unknown parents fall back to the root.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_node(parent, NodeKind::Text(text.into()))
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let parent = if parent.index() < self.nodes.len() {
            parent
        } else {
            NodeId::ROOT
        };

        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        if let Some(node) = self.nodes.get_mut(parent.index()) {
            node.children.push(id);
        }
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates `id` followed by its parent, grandparent, ... up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.node(id).map(|_| id),
        }
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Lowercased tag name, `None` for text and the document node.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.name.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attr(name))
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.text(id).is_some()
    }

    /// Class tokens of an element in declaration order.
    pub fn class_names(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.attr(id, "class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    /// First element named `tag` in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self
                .tag_name(id)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// Concatenated text of every text descendant of `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(text) = self.text(current) {
                out.push_str(text);
                continue;
            }
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }
}

/// Upward walk produced by [`Document::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.document.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use super::ElementData;
    use super::NodeId;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::empty();
        let body = doc.append_element(doc.root(), ElementData::new("BODY"));
        let para = doc.append_element(
            body,
            ElementData::new("p").with_attr("class", "  lead   muted lead "),
        );
        let text = doc.append_text(para, "Hello");
        (doc, body, para, text)
    }

    #[test]
    fn empty_document_has_only_root() {
        let doc = Document::empty();
        assert_eq!(doc.node_count(), 1);
        assert!(!doc.has_content());
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn appends_link_parents_and_children() {
        let (doc, body, para, text) = sample();
        assert_eq!(doc.parent(text), Some(para));
        assert_eq!(doc.parent(para), Some(body));
        assert_eq!(doc.children(body), &[para]);
        assert_eq!(doc.tag_name(body), Some("body"));
        assert_eq!(doc.text(text), Some("Hello"));
        assert_eq!(doc.tag_name(text), None);
    }

    #[test]
    fn ancestors_walk_from_node_to_root() {
        let (doc, body, para, text) = sample();
        let chain = doc.ancestors(text).collect::<Vec<_>>();
        assert_eq!(chain, vec![text, para, body, doc.root()]);
    }

    #[test]
    fn class_names_keep_declaration_order_and_duplicates() {
        let (doc, _, para, text) = sample();
        let classes = doc.class_names(para).collect::<Vec<_>>();
        assert_eq!(classes, vec!["lead", "muted", "lead"]);
        assert_eq!(doc.class_names(text).count(), 0);
    }

    #[test]
    fn unknown_parent_falls_back_to_root() {
        let mut doc = Document::empty();
        let orphan = doc.append_text(NodeId(99), "x");
        assert_eq!(doc.parent(orphan), Some(doc.root()));
        assert!(doc.node(NodeId(99)).is_none());
        assert!(doc.children(NodeId(99)).is_empty());
    }

    #[test]
    fn finds_first_element_and_text_content() {
        let (doc, _, para, _) = sample();
        assert_eq!(doc.find_first("P"), Some(para));
        assert_eq!(doc.text_content(doc.root()), "Hello");
        assert_eq!(doc.find_first("table"), None);
    }
}
