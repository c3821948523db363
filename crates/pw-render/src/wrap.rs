//! Greedy word wrapping over styled spans.

use pw_layout::StyledSpan;
use pw_style::TextStyle;

/// A word keeps the style of the span it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Word<'a> {
    pub text: &'a str,
    pub style: &'a TextStyle,
    pub space_before: bool,
}

/// One output row: words with their separating spaces already decided.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Row<'a> {
    pub words: Vec<Word<'a>>,
    pub width: usize,
}

impl<'a> Row<'a> {
    fn push(&mut self, mut word: Word<'a>) {
        word.space_before = word.space_before && !self.words.is_empty();
        self.width += usize::from(word.space_before) + word.text.chars().count();
        self.words.push(word);
    }

    fn fits(&self, word: &Word<'_>, available: usize) -> bool {
        if self.words.is_empty() {
            return true;
        }
        let extra = usize::from(word.space_before) + word.text.chars().count();
        self.width + extra <= available
    }
}

/// Wraps `spans` into rows at most `available` columns wide. A line-break
/// span always ends the current row; words wider than a row get one alone.
pub(crate) fn wrap(spans: &[StyledSpan], available: usize) -> Vec<Row<'_>> {
    let available = available.max(1);
    let mut rows = Vec::new();
    let mut row = Row::default();
    let mut pending_space = false;

    for span in spans {
        if span.is_line_break() {
            rows.push(std::mem::take(&mut row));
            pending_space = false;
            continue;
        }

        let mut rest = span.text.as_str();
        while !rest.is_empty() {
            let trimmed = rest.trim_start();
            pending_space |= trimmed.len() != rest.len();
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            let word = Word {
                text: &trimmed[..end],
                style: &span.style,
                space_before: pending_space,
            };
            if !row.fits(&word, available) {
                rows.push(std::mem::take(&mut row));
            }
            row.push(word);
            pending_space = false;
            rest = &trimmed[end..];
        }
    }

    if !row.words.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
