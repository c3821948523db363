//! Node classification predicates.
//!
//! Text nodes, the document node and ids outside the arena never match.

use crate::Document;
use crate::NodeId;

pub fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "body"
            | "main"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "nav"
            | "aside"
            | "address"
            | "div"
            | "p"
            | "pre"
            | "hr"
            | "form"
            | "fieldset"
            | "legend"
            | "ul"
            | "ol"
            | "li"
            | "dl"
            | "dt"
            | "dd"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "figure"
            | "figcaption"
            | "details"
            | "summary"
            | "center"
            | "table"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
            | "caption"
            | "blockquote"
    )
}

pub fn is_block(doc: &Document, id: NodeId) -> bool {
    doc.tag_name(id).is_some_and(is_block_tag)
}

/// `ul` or `ol`.
pub fn is_list(doc: &Document, id: NodeId) -> bool {
    matches!(doc.tag_name(id), Some("ul" | "ol"))
}

pub fn is_ordered_list(doc: &Document, id: NodeId) -> bool {
    doc.tag_name(id) == Some("ol")
}

pub fn is_list_item(doc: &Document, id: NodeId) -> bool {
    doc.tag_name(id) == Some("li")
}

pub fn is_line_break(doc: &Document, id: NodeId) -> bool {
    doc.tag_name(id) == Some("br")
}

pub fn is_image(doc: &Document, id: NodeId) -> bool {
    doc.tag_name(id) == Some("img")
}

/// Elements whose content never reaches the page.
pub fn is_hidden(doc: &Document, id: NodeId) -> bool {
    matches!(
        doc.tag_name(id),
        Some("head" | "title" | "script" | "style" | "noscript" | "template" | "meta" | "link")
    )
}
