//! Block-level box decoration.
//!
//! Container styles are only resolved here; applying them geometrically is the
//! renderer's job.

use crate::Color;
use crate::TextAlignment;
use serde::Deserialize;
use serde::Serialize;

/// Per-side lengths in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "EdgesInput")]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn vertical(value: f32) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }

    pub const fn left(value: f32) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}

/// `padding = 4` or `padding = { left = 12 }` in configuration files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum EdgesInput {
    Uniform(f32),
    Sides {
        #[serde(default)]
        top: f32,
        #[serde(default)]
        right: f32,
        #[serde(default)]
        bottom: f32,
        #[serde(default)]
        left: f32,
    },
}

impl From<EdgesInput> for Edges {
    fn from(input: EdgesInput) -> Self {
        match input {
            EdgesInput::Uniform(value) => Self::uniform(value),
            EdgesInput::Sides {
                top,
                right,
                bottom,
                left,
            } => Self {
                top,
                right,
                bottom,
                left,
            },
        }
    }
}

/// Decoration for one block container.
///
/// Several container styles can stack on one node (tag first, then classes in
/// declaration order); each wraps the previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerStyle {
    #[serde(skip_serializing_if = "Edges::is_zero")]
    pub padding: Edges,
    #[serde(skip_serializing_if = "Edges::is_zero")]
    pub border: Edges,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlignment>,
}

impl ContainerStyle {
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn border(mut self, border: Edges, color: Color) -> Self {
        self.border = border;
        self.border_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn align(mut self, align: TextAlignment) -> Self {
        self.align = Some(align);
        self
    }
}

/// Sums paddings and borders of a stack; for colours and alignment the last
/// style that sets one wins.
pub fn flatten(stack: &[ContainerStyle]) -> ContainerStyle {
    stack
        .iter()
        .fold(ContainerStyle::default(), |acc, style| ContainerStyle {
            padding: acc.padding.add(&style.padding),
            border: acc.border.add(&style.border),
            border_color: style.border_color.or(acc.border_color),
            background: style.background.or(acc.background),
            align: style.align.or(acc.align),
        })
}

#[cfg(test)]
mod tests {
    use super::ContainerStyle;
    use super::Edges;
    use super::flatten;
    use crate::Color;
    use crate::TextAlignment;

    #[test]
    fn flatten_sums_edges_and_keeps_last_alignment() {
        let stack = [
            ContainerStyle::default()
                .padding(Edges::vertical(4.0))
                .align(TextAlignment::Center),
            ContainerStyle::default()
                .padding(Edges::left(10.0))
                .border(Edges::uniform(1.0), Color::BLACK)
                .align(TextAlignment::Right),
        ];
        let flat = flatten(&stack);
        assert_eq!(
            flat.padding,
            Edges {
                top: 4.0,
                right: 0.0,
                bottom: 4.0,
                left: 10.0
            }
        );
        assert_eq!(flat.border, Edges::uniform(1.0));
        assert_eq!(flat.border_color, Some(Color::BLACK));
        assert_eq!(flat.align, Some(TextAlignment::Right));
    }

    #[test]
    fn flatten_of_nothing_is_default() {
        assert_eq!(flatten(&[]), ContainerStyle::default());
    }
}
