//! Tag and class style tables.

use crate::Alignment;
use crate::Color;
use crate::ContainerStyle;
use crate::Edges;
use crate::TextAlignment;
use crate::TextStyle;
use pw_core::Unit;
use pw_core::units::to_points;
use std::collections::HashMap;

/// Every tag/class lookup table consulted while composing a document.
///
/// Tag keys are stored lowercased, class keys verbatim. Registering a key a
/// second time replaces the earlier value. The registry is filled before a
/// conversion and only borrowed immutably while lines are composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    tag_text_styles: HashMap<String, TextStyle>,
    tag_container_styles: HashMap<String, ContainerStyle>,
    class_text_styles: HashMap<String, TextStyle>,
    class_container_styles: HashMap<String, ContainerStyle>,
    class_text_alignments: HashMap<String, TextAlignment>,
    list_vertical_padding: f32,
}

impl StyleRegistry {
    /// Registry with nothing registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the stock tag styles and utility classes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        let headings = [
            ("h1", 32.0),
            ("h2", 28.0),
            ("h3", 24.0),
            ("h4", 20.0),
            ("h5", 16.0),
            ("h6", 12.0),
        ];
        for (tag, size) in headings {
            registry.set_text_style_for_tag(tag, TextStyle::default().font_size(size).bold());
            registry.set_container_style_for_tag(
                tag,
                ContainerStyle::default().padding(Edges::vertical(size / 4.0)),
            );
        }

        for tag in ["b", "strong"] {
            registry.set_text_style_for_tag(tag, TextStyle::default().bold());
        }
        for tag in ["i", "em", "cite", "var"] {
            registry.set_text_style_for_tag(tag, TextStyle::default().italic());
        }
        for tag in ["u", "ins"] {
            registry.set_text_style_for_tag(tag, TextStyle::default().underline());
        }
        for tag in ["s", "strike", "del"] {
            registry.set_text_style_for_tag(tag, TextStyle::default().strikethrough());
        }
        for tag in ["code", "kbd", "samp", "tt", "pre"] {
            registry
                .set_text_style_for_tag(tag, TextStyle::default().font_family("Courier New"));
        }
        registry.set_text_style_for_tag(
            "a",
            TextStyle::default().underline().color(Color::LINK_BLUE),
        );
        registry.set_text_style_for_tag("small", TextStyle::default().font_size(10.0));
        registry.set_text_style_for_tag(
            "mark",
            TextStyle::default().background(Color::HIGHLIGHT),
        );

        registry.set_container_style_for_tag(
            "p",
            ContainerStyle::default().padding(Edges::vertical(6.0)),
        );
        for tag in ["ul", "ol"] {
            registry.set_container_style_for_tag(
                tag,
                ContainerStyle::default().padding(Edges::left(24.0)),
            );
        }
        registry.set_container_style_for_tag(
            "blockquote",
            ContainerStyle::default()
                .padding(Edges::left(12.0))
                .border(Edges::left(2.0), Color::rgb(0xbb, 0xbb, 0xbb)),
        );
        registry.set_container_style_for_tag(
            "pre",
            ContainerStyle::default().background(Color::rgb(0xf4, 0xf4, 0xf4)),
        );

        registry.set_alignment_for_class("text-left", Alignment::Left);
        registry.set_alignment_for_class("text-center", Alignment::Center);
        registry.set_alignment_for_class("text-right", Alignment::Right);
        registry.set_alignment_for_class("text-justify", Alignment::Justify);
        registry.set_text_style_for_class("bold", TextStyle::default().bold());
        registry.set_text_style_for_class("italic", TextStyle::default().italic());
        registry.set_text_style_for_class("underline", TextStyle::default().underline());

        registry
    }

    pub fn set_text_style_for_tag(&mut self, tag: &str, style: TextStyle) {
        self.tag_text_styles.insert(tag.to_ascii_lowercase(), style);
    }

    pub fn set_container_style_for_tag(&mut self, tag: &str, style: ContainerStyle) {
        self.tag_container_styles
            .insert(tag.to_ascii_lowercase(), style);
    }

    pub fn set_text_style_for_class(&mut self, class: &str, style: TextStyle) {
        self.class_text_styles.insert(class.to_owned(), style);
    }

    pub fn set_container_style_for_class(&mut self, class: &str, style: ContainerStyle) {
        self.class_container_styles.insert(class.to_owned(), style);
    }

    pub fn set_text_alignment_for_class(&mut self, class: &str, alignment: TextAlignment) {
        self.class_text_alignments
            .insert(class.to_owned(), alignment);
    }

    /// Registers both the container alignment and the text alignment of `class`.
    pub fn set_alignment_for_class(&mut self, class: &str, alignment: Alignment) {
        let resolved = alignment.resolved();
        self.set_container_style_for_class(class, ContainerStyle::default().align(resolved));
        self.set_text_alignment_for_class(class, resolved);
    }

    /// Sets the vertical padding of list-marker rows, converted to points.
    pub fn set_list_vertical_padding(&mut self, value: f32, unit: Unit) {
        self.list_vertical_padding = to_points(value, unit);
    }

    pub fn clear_class_text_styles(&mut self) {
        self.class_text_styles.clear();
    }

    pub fn clear_class_container_styles(&mut self) {
        self.class_container_styles.clear();
    }

    pub fn clear_class_text_alignments(&mut self) {
        self.class_text_alignments.clear();
    }

    pub fn clear_default_class_styles(&mut self) {
        self.clear_class_text_styles();
        self.clear_class_container_styles();
        self.clear_class_text_alignments();
    }

    /// `tag` may be given in any case.
    pub fn tag_text_style(&self, tag: &str) -> Option<&TextStyle> {
        if tag.bytes().any(|byte| byte.is_ascii_uppercase()) {
            return self.tag_text_styles.get(&tag.to_ascii_lowercase());
        }
        self.tag_text_styles.get(tag)
    }

    pub fn tag_container_style(&self, tag: &str) -> Option<&ContainerStyle> {
        if tag.bytes().any(|byte| byte.is_ascii_uppercase()) {
            return self.tag_container_styles.get(&tag.to_ascii_lowercase());
        }
        self.tag_container_styles.get(tag)
    }

    pub fn class_text_style(&self, class: &str) -> Option<&TextStyle> {
        self.class_text_styles.get(class)
    }

    pub fn class_container_style(&self, class: &str) -> Option<&ContainerStyle> {
        self.class_container_styles.get(class)
    }

    pub fn class_text_alignment(&self, class: &str) -> Option<TextAlignment> {
        self.class_text_alignments.get(class).copied()
    }

    /// In points.
    pub fn list_vertical_padding(&self) -> f32 {
        self.list_vertical_padding
    }

    pub fn rule_count(&self) -> usize {
        self.tag_text_styles.len()
            + self.tag_container_styles.len()
            + self.class_text_styles.len()
            + self.class_container_styles.len()
            + self.class_text_alignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::StyleRegistry;
    use crate::Alignment;
    use crate::ContainerStyle;
    use crate::TextAlignment;
    use crate::TextStyle;
    use pw_core::Unit;

    #[test]
    fn tag_keys_are_case_insensitive() {
        let mut registry = StyleRegistry::empty();
        registry.set_text_style_for_tag("H1", TextStyle::default().font_size(30.0));
        assert_eq!(
            registry.tag_text_style("h1").and_then(|style| style.font_size),
            Some(30.0)
        );
        assert!(registry.tag_text_style("H1").is_some());
    }

    #[test]
    fn class_keys_are_exact() {
        let mut registry = StyleRegistry::empty();
        registry.set_text_style_for_class("Lead", TextStyle::default().bold());
        assert!(registry.class_text_style("Lead").is_some());
        assert!(registry.class_text_style("lead").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = StyleRegistry::empty();
        registry.set_text_style_for_class("x", TextStyle::default().bold());
        registry.set_text_style_for_class("x", TextStyle::default().italic());
        assert_eq!(
            registry.class_text_style("x"),
            Some(&TextStyle::default().italic())
        );
    }

    #[test]
    fn alignment_sets_container_and_text_entries() {
        let mut registry = StyleRegistry::empty();
        registry.set_alignment_for_class("c", Alignment::Center);
        registry.set_alignment_for_class("j", Alignment::Justify);
        assert_eq!(
            registry.class_text_alignment("c"),
            Some(TextAlignment::Center)
        );
        assert_eq!(
            registry.class_container_style("c"),
            Some(&ContainerStyle::default().align(TextAlignment::Center))
        );
        assert_eq!(registry.class_text_alignment("j"), Some(TextAlignment::Left));
    }

    #[test]
    fn list_padding_is_stored_in_points() {
        let mut registry = StyleRegistry::empty();
        registry.set_list_vertical_padding(1.0, Unit::Inch);
        assert!((registry.list_vertical_padding() - 72.0).abs() < 0.001);
    }

    #[test]
    fn clear_default_class_styles_keeps_tag_tables() {
        let mut registry = StyleRegistry::with_defaults();
        assert!(registry.class_text_style("bold").is_some());
        assert!(registry.class_text_alignment("text-center").is_some());
        registry.clear_default_class_styles();
        assert!(registry.class_text_style("bold").is_none());
        assert!(registry.class_container_style("text-center").is_none());
        assert!(registry.class_text_alignment("text-center").is_none());
        assert!(registry.tag_text_style("strong").is_some());
        assert!(registry.tag_container_style("ul").is_some());
    }

    #[test]
    fn individual_clears_only_touch_their_table() {
        let mut registry = StyleRegistry::with_defaults();
        registry.clear_class_text_alignments();
        assert!(registry.class_text_alignment("text-right").is_none());
        assert!(registry.class_container_style("text-right").is_some());
        assert!(registry.class_text_style("italic").is_some());
    }
}
