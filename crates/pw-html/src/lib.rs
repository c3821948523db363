//! HTML tokenization and tree construction.

mod tokenizer;

use log::debug;
use pw_dom::Document;
use pw_dom::ElementData;
use pw_dom::NodeId;
use pw_dom::classify::is_block_tag;
use tokenizer::Token;
use tokenizer::decode_entities;
use tokenizer::tokenize;

/// Parser switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collapse whitespace runs in text to one space (outside `pre`/`textarea`).
    pub collapse_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
        }
    }
}

/// Parses raw HTML into a DOM document.
#[derive(Debug, Default)]
pub struct HtmlParser {
    pub options: ParseOptions,
}

impl HtmlParser {
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, input: &str) -> Document {
        let tokens = tokenize(input);
        let document = build_tree(tokens, self.options);
        debug!(
            "parsed {} bytes of html into {} nodes",
            input.len(),
            document.node_count()
        );
        document
    }
}

fn build_tree(tokens: Vec<Token>, options: ParseOptions) -> Document {
    let mut document = Document::empty();
    let mut stack: Vec<(NodeId, String)> = Vec::new();
    let mut preformatted_depth = 0_usize;

    for token in tokens {
        let current = stack
            .last()
            .map(|(id, _)| *id)
            .unwrap_or_else(|| document.root());

        match token {
            Token::Text(text) => {
                let raw_parent = stack
                    .last()
                    .is_some_and(|(_, name)| tokenizer::is_raw_text_tag(name));
                let mut text = if raw_parent { text } else { decode_entities(&text) };
                if options.collapse_whitespace && preformatted_depth == 0 && !raw_parent {
                    text = collapse_whitespace(&text);
                }
                if !text.is_empty() {
                    document.append_text(current, text);
                }
            }
            Token::Start {
                name,
                attrs,
                self_closing,
            } => {
                close_implied(&mut stack, &name, &mut preformatted_depth);
                let parent = stack
                    .last()
                    .map(|(id, _)| *id)
                    .unwrap_or_else(|| document.root());

                let mut element = ElementData::new(name.as_str());
                element.attrs = attrs;
                let id = document.append_element(parent, element);

                if !self_closing && !is_void(&name) {
                    if is_preformatted(&name) {
                        preformatted_depth = preformatted_depth.saturating_add(1);
                    }
                    stack.push((id, name));
                }
            }
            Token::End { name } => {
                if !stack.iter().any(|(_, open)| *open == name) {
                    continue;
                }
                while let Some((_, open)) = stack.pop() {
                    if is_preformatted(&open) {
                        preformatted_depth = preformatted_depth.saturating_sub(1);
                    }
                    if open == name {
                        break;
                    }
                }
            }
        }
    }

    document.title = document
        .find_first("title")
        .map(|title| collapse_whitespace(&document.text_content(title)).trim().to_owned())
        .unwrap_or_default();
    document
}

/// Closes elements whose end tag HTML lets authors omit, repeating until
/// the incoming tag no longer implies a close.
fn close_implied(
    stack: &mut Vec<(NodeId, String)>,
    incoming: &str,
    preformatted_depth: &mut usize,
) {
    while let Some(index) = implied_close_index(stack, incoming) {
        for (_, closed) in stack.drain(index..) {
            if is_preformatted(&closed) {
                *preformatted_depth = preformatted_depth.saturating_sub(1);
            }
        }
    }
}

/// Stack index of the open element `incoming` closes.
fn implied_close_index(stack: &[(NodeId, String)], incoming: &str) -> Option<usize> {
    let scoped = match incoming {
        "li" => find_open(stack, &["li"], |open| matches!(open, "ul" | "ol")),
        "dt" | "dd" => find_open(stack, &["dt", "dd"], |open| open == "dl"),
        tag if is_block_tag(tag) => None,
        _ => return None,
    };
    scoped.or_else(|| find_open(stack, &["p"], |open| open != "p" && is_block_tag(open)))
}

/// Searches down from the top of the stack for one of `targets`, giving up
/// at the first element `boundary` accepts.
fn find_open(
    stack: &[(NodeId, String)],
    targets: &[&str],
    boundary: fn(&str) -> bool,
) -> Option<usize> {
    for (index, (_, open)) in stack.iter().enumerate().rev() {
        if targets.contains(&open.as_str()) {
            return Some(index);
        }
        if boundary(open) {
            return None;
        }
    }
    None
}

fn is_preformatted(tag: &str) -> bool {
    matches!(tag, "pre" | "textarea")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Folds every whitespace run into a single space without trimming the edges.
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut ws = false;
    for ch in input.chars() {
        if ch.is_whitespace() && ch != '\u{a0}' {
            if !ws {
                out.push(' ');
                ws = true;
            }
        } else {
            out.push(ch);
            ws = false;
        }
    }
    out
}
