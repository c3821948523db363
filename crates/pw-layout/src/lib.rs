//! Layout engine entry points (style resolution + paragraph composition).

pub mod compose;
pub mod context;
mod image;
pub mod lines;
pub mod resolve;

pub use compose::ComposedLine;
pub use compose::LineComposer;
pub use compose::Marker;
pub use compose::StyledSpan;
pub use context::ListMarker;
pub use image::ImageResolver;
pub use image::NoImages;
pub use resolve::StyleResolver;

use crate::lines::FlowItem;
use crate::lines::group_lines;
use log::debug;
use log::warn;
use pw_dom::Document;
use pw_dom::NodeId;
use pw_style::ContainerStyle;
use pw_style::StyleRegistry;
use pw_style::container::flatten;
use serde::Serialize;

/// Composed document, in flow order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutTree {
    pub title: String,
    pub items: Vec<LayoutItem>,
}

impl LayoutTree {
    pub fn lines(&self) -> impl Iterator<Item = &ComposedLine> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Line { line, .. } => Some(line),
            LayoutItem::Image { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutItem {
    Line {
        #[serde(flatten)]
        line: ComposedLine,
        /// Container styles of the enclosing blocks, flattened outermost
        /// first into one box.
        #[serde(rename = "box")]
        container: ContainerStyle,
    },
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(skip)]
        bytes: Option<Vec<u8>>,
        resolved: bool,
        #[serde(rename = "box")]
        container: ContainerStyle,
    },
}

impl LayoutItem {
    pub fn container(&self) -> &ContainerStyle {
        match self {
            Self::Line { container, .. } | Self::Image { container, .. } => container,
        }
    }
}

/// Computes composed lines from DOM and styles.
#[derive(Debug, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn compute(
        &self,
        document: &Document,
        registry: &StyleRegistry,
        images: &dyn ImageResolver,
    ) -> LayoutTree {
        let composer = LineComposer::new(document, registry);
        let mut tree = LayoutTree {
            title: document.title.clone(),
            items: Vec::new(),
        };
        if !document.has_content() {
            return tree;
        }

        let mut dropped = 0_usize;
        for item in group_lines(document) {
            match item {
                FlowItem::Line(nodes) => match composer.compose(&nodes) {
                    Some(line) => {
                        let container = enclosing_box(&composer, document, line.context);
                        tree.items.push(LayoutItem::Line { line, container });
                    }
                    None => dropped += 1,
                },
                FlowItem::Image(node) => {
                    tree.items.push(image_item(&composer, document, node, images));
                }
            }
        }

        debug!(
            "layout produced {} item(s), dropped {dropped} line(s) without a block context",
            tree.items.len()
        );
        tree
    }
}

fn enclosing_box(
    composer: &LineComposer<'_>,
    document: &Document,
    node: NodeId,
) -> ContainerStyle {
    let resolver = composer.resolver();
    let mut chain = document.ancestors(node).collect::<Vec<_>>();
    chain.reverse();
    let stack = chain
        .into_iter()
        .flat_map(|id| resolver.resolve_container_styles(id))
        .collect::<Vec<_>>();
    flatten(&stack)
}

fn image_item(
    composer: &LineComposer<'_>,
    document: &Document,
    node: NodeId,
    images: &dyn ImageResolver,
) -> LayoutItem {
    let src = document.attr(node, "src").unwrap_or_default().trim().to_owned();
    let alt = document.attr(node, "alt").map(str::to_owned);
    let bytes = if src.is_empty() {
        None
    } else {
        images.resolve(&src)
    };
    if bytes.is_none() {
        warn!("image `{src}` could not be resolved");
    }

    LayoutItem::Image {
        resolved: bytes.is_some(),
        src,
        alt,
        bytes,
        container: enclosing_box(composer, document, node),
    }
}
