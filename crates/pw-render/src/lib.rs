//! Plain-text rendering of composed layout trees.

mod wrap;

use log::debug;
use pw_layout::ComposedLine;
use pw_layout::LayoutItem;
use pw_layout::LayoutTree;
use pw_style::ContainerStyle;
use pw_style::TextAlignment;
use pw_style::TextStyle;
use wrap::Row;
use wrap::wrap;

/// Points covered by one output column.
pub const POINTS_PER_COLUMN: f32 = 6.0;

/// Points covered by one output row.
pub const POINTS_PER_ROW: f32 = 12.0;

/// Most blank rows a list marker's vertical padding may add.
pub const MAX_PADDING_ROWS: usize = 4;

/// Rendered output, one string per terminal row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    pub fn to_text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Converts layout trees into fixed-width text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Total row width in columns.
    pub width: usize,
    /// Emit SGR escapes for bold, italic, underline and strike-through.
    pub ansi: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: 80,
            ansi: false,
        }
    }
}

impl TextRenderer {
    pub fn render(&self, layout: &LayoutTree) -> Frame {
        let mut frame = Frame::default();
        if !layout.title.is_empty() {
            frame.lines.push(layout.title.clone());
            frame
                .lines
                .push("=".repeat(layout.title.chars().count().min(self.width)));
        }

        let mut previous_was_list_item = false;
        for item in &layout.items {
            let is_list_item =
                matches!(item, LayoutItem::Line { line, .. } if line.marker.is_some());
            if !frame.lines.is_empty() && !(is_list_item && previous_was_list_item) {
                frame.lines.push(String::new());
            }
            match item {
                LayoutItem::Line { line, container } => {
                    self.render_line(line, container, &mut frame);
                }
                LayoutItem::Image {
                    src,
                    alt,
                    resolved,
                    container,
                    ..
                } => {
                    let label = alt
                        .as_deref()
                        .filter(|alt| !alt.is_empty())
                        .unwrap_or(src.as_str());
                    let status = if *resolved { "" } else { " (missing)" };
                    frame
                        .lines
                        .push(format!("{}[image: {label}]{status}", indent(container)));
                }
            }
            previous_was_list_item = is_list_item;
        }

        debug!(
            "rendered {} item(s) into {} row(s)",
            layout.items.len(),
            frame.lines.len()
        );
        frame
    }

    fn render_line(&self, line: &ComposedLine, container: &ContainerStyle, frame: &mut Frame) {
        let indent = indent(container);
        let (marker, marker_width) = match &line.marker {
            Some(marker) => {
                let min_columns = (marker.min_width / POINTS_PER_COLUMN).ceil() as usize;
                let width = marker.text.chars().count().max(min_columns);
                let padding_rows = ((marker.vertical_padding / POINTS_PER_ROW).round() as usize)
                    .min(MAX_PADDING_ROWS);
                frame
                    .lines
                    .extend(std::iter::repeat_n(String::new(), padding_rows));
                (format!("{:<width$}", marker.text), width)
            }
            None => (String::new(), 0),
        };

        let available = self
            .width
            .saturating_sub(indent.chars().count() + marker_width)
            .max(1);
        let alignment = line
            .alignment
            .or(container.align)
            .unwrap_or(TextAlignment::Left);

        for (index, row) in wrap(&line.spans, available).iter().enumerate() {
            let lead = if index == 0 {
                marker.clone()
            } else {
                " ".repeat(marker_width)
            };
            let offset = match alignment {
                TextAlignment::Left => 0,
                TextAlignment::Center => available.saturating_sub(row.width) / 2,
                TextAlignment::Right => available.saturating_sub(row.width),
            };
            let body = self.paint(row);
            let text = format!("{indent}{lead}{}{body}", " ".repeat(offset));
            frame.lines.push(text.trim_end().to_owned());
        }
    }

    fn paint(&self, row: &Row<'_>) -> String {
        let mut out = String::new();
        for word in &row.words {
            if word.space_before {
                out.push(' ');
            }
            match sgr_codes(word.style) {
                Some(codes) if self.ansi => {
                    out.push_str(&format!("\u{1b}[{codes}m{}\u{1b}[0m", word.text));
                }
                _ => out.push_str(word.text),
            }
        }
        out
    }
}

fn indent(container: &ContainerStyle) -> String {
    let points = container.padding.left + container.border.left;
    let columns = (points / POINTS_PER_COLUMN).round().max(0.0) as usize;
    " ".repeat(columns)
}

fn sgr_codes(style: &TextStyle) -> Option<String> {
    let mut codes = Vec::new();
    if style.is_bold() {
        codes.push("1");
    }
    if style.italic == Some(true) {
        codes.push("3");
    }
    if style.underline == Some(true) {
        codes.push("4");
    }
    if style.strikethrough == Some(true) {
        codes.push("9");
    }
    (!codes.is_empty()).then(|| codes.join(";"))
}

#[cfg(test)]
mod tests {
    use super::MAX_PADDING_ROWS;
    use super::TextRenderer;
    use pw_core::Unit;
    use pw_html::HtmlParser;
    use pw_layout::LayoutEngine;
    use pw_layout::LayoutTree;
    use pw_layout::NoImages;
    use pw_style::Alignment;
    use pw_style::StyleRegistry;

    fn render(html: &str, registry: &StyleRegistry, renderer: TextRenderer) -> Vec<String> {
        let doc = HtmlParser::default().parse(html);
        let tree = LayoutEngine.compute(&doc, registry, &NoImages);
        renderer.render(&tree).lines
    }

    #[test]
    fn empty_layout_renders_nothing() {
        let frame = TextRenderer::default().render(&LayoutTree::default());
        assert!(frame.lines.is_empty());
        assert_eq!(frame.to_text(), "\n");
    }

    #[test]
    fn ordered_list_gets_marker_column() {
        let lines = render(
            "<ol><li>one</li><li>two</li></ol>",
            &StyleRegistry::empty(),
            TextRenderer::default(),
        );
        assert_eq!(lines, vec!["1.   one", "2.   two"]);
    }

    #[test]
    fn list_padding_adds_bounded_blank_rows() {
        let mut registry = StyleRegistry::empty();
        registry.set_list_vertical_padding(24.0, Unit::Point);
        let lines = render("<ul><li>a</li></ul>", &registry, TextRenderer::default());
        assert_eq!(lines, vec!["", "", "\u{2022}    a"]);

        registry.set_list_vertical_padding(1e12, Unit::Point);
        let lines = render("<ul><li>a</li></ul>", &registry, TextRenderer::default());
        assert_eq!(lines.len(), MAX_PADDING_ROWS + 1);
        assert!(lines[..MAX_PADDING_ROWS].iter().all(String::is_empty));
    }

    #[test]
    fn paragraphs_are_separated_and_indented() {
        let lines = render(
            "<p>first</p><blockquote>quoted</blockquote>",
            &StyleRegistry::with_defaults(),
            TextRenderer::default(),
        );
        assert_eq!(lines, vec!["first", "", "  quoted"]);
    }

    #[test]
    fn centered_text_is_padded() {
        let mut registry = StyleRegistry::empty();
        registry.set_alignment_for_class("c", Alignment::Center);
        let lines = render(
            "<p class=\"c\">ab</p>",
            &registry,
            TextRenderer {
                width: 10,
                ansi: false,
            },
        );
        assert_eq!(lines, vec!["    ab"]);
    }

    #[test]
    fn line_breaks_and_wrapping() {
        let lines = render(
            "<p>alpha beta gamma<br>delta</p>",
            &StyleRegistry::empty(),
            TextRenderer {
                width: 11,
                ansi: false,
            },
        );
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn ansi_mode_wraps_styled_words() {
        let lines = render(
            "<p><b>hi</b> there</p>",
            &StyleRegistry::with_defaults(),
            TextRenderer {
                width: 40,
                ansi: true,
            },
        );
        assert_eq!(lines, vec!["\u{1b}[1mhi\u{1b}[0m there"]);
    }

    #[test]
    fn title_and_missing_images() {
        let lines = render(
            "<title>Doc</title><p><img src=\"x.png\"></p>",
            &StyleRegistry::empty(),
            TextRenderer::default(),
        );
        assert_eq!(lines, vec!["Doc", "===", "", "[image: x.png] (missing)"]);
    }
}
