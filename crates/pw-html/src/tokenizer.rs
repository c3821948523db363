//! HTML tokenizer over string slices.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Start {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    End {
        name: String,
    },
    Text(String),
}

pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer {
        source,
        pos: 0,
        tokens: Vec::new(),
    };
    tokenizer.run();
    tokenizer.tokens
}

pub(crate) fn is_raw_text_tag(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "textarea" | "title")
}

struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn run(&mut self) {
        while !self.rest().is_empty() {
            let rest = self.rest();
            if let Some(body) = rest.strip_prefix("<!--") {
                let end = body.find("-->").map_or(body.len(), |end| end + 3);
                self.pos += 4 + end;
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.pos += rest.find('>').map_or(rest.len(), |end| end + 1);
            } else {
                let tag = (rest.starts_with("</") && self.end_tag())
                    || (rest.starts_with('<') && self.start_tag());
                if !tag {
                    self.text();
                }
            }
        }
    }

    /// Text up to the next `<`. A `<` at the start that opened no tag is
    /// taken literally.
    fn text(&mut self) {
        let rest = self.rest();
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[skip..].find('<').map_or(rest.len(), |found| skip + found);
        self.push_text(&rest[..end]);
        self.pos += end;
    }

    fn end_tag(&mut self) -> bool {
        let body = &self.rest()[2..];
        let trimmed = body.trim_start_matches(is_space);
        let len = name_len(trimmed);
        if len == 0 {
            return false;
        }
        let Some(close) = trimmed[len..].find('>') else {
            return false;
        };

        self.tokens.push(Token::End {
            name: trimmed[..len].to_ascii_lowercase(),
        });
        self.pos += 2 + (body.len() - trimmed.len()) + len + close + 1;
        true
    }

    fn start_tag(&mut self) -> bool {
        let Some((token, consumed)) = parse_start_tag(self.rest()) else {
            return false;
        };
        self.pos += consumed;

        let raw_text = match &token {
            Token::Start {
                name,
                self_closing: false,
                ..
            } if is_raw_text_tag(name) => Some(name.clone()),
            _ => None,
        };
        self.tokens.push(token);
        if let Some(name) = raw_text {
            self.raw_text(&name);
        }
        true
    }

    /// Everything up to the matching end tag is one text token.
    fn raw_text(&mut self, name: &str) {
        let rest = self.rest();
        let lower = rest.to_ascii_lowercase();
        let needle = format!("</{name}");
        let mut from = 0;

        while let Some(found) = lower[from..].find(&needle) {
            let start = from + found;
            let after = rest[start + needle.len()..].trim_start_matches(is_space);
            if let Some(tail) = after.strip_prefix('>') {
                self.push_text(&rest[..start]);
                self.tokens.push(Token::End {
                    name: name.to_owned(),
                });
                self.pos += rest.len() - tail.len();
                return;
            }
            from = start + 1;
        }

        self.push_text(rest);
        self.pos = self.source.len();
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.tokens.push(Token::Text(text.to_owned()));
        }
    }
}

/// Parses `<name attr=value ...>` at the start of `input`, returning the
/// token and the number of bytes consumed. Unterminated tags yield `None`.
fn parse_start_tag(input: &str) -> Option<(Token, usize)> {
    let after_lt = input.get(1..)?;
    let len = name_len(after_lt);
    if len == 0 {
        return None;
    }

    let name = after_lt[..len].to_ascii_lowercase();
    let mut rest = &after_lt[len..];
    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        rest = rest.trim_start_matches(is_space);
        if let Some(after) = rest.strip_prefix('>') {
            rest = after;
            break;
        }
        if let Some(after) = rest.strip_prefix('/') {
            self_closing = true;
            rest = after.trim_start_matches(is_space);
            if let Some(after) = rest.strip_prefix('>') {
                rest = after;
                break;
            }
            continue;
        }
        if rest.is_empty() {
            return None;
        }

        let attr_len = name_len(rest);
        if attr_len == 0 {
            // Junk inside the tag: drop everything up to its end.
            rest = rest.find('>').map_or("", |end| &rest[end + 1..]);
            break;
        }
        let attr_name = rest[..attr_len].to_ascii_lowercase();
        rest = rest[attr_len..].trim_start_matches(is_space);

        let mut value = "";
        if let Some(after_eq) = rest.strip_prefix('=') {
            (value, rest) = attribute_value(after_eq.trim_start_matches(is_space));
        }
        attrs.push((attr_name, decode_entities(value)));
    }

    let token = Token::Start {
        name,
        attrs,
        self_closing,
    };
    Some((token, input.len() - rest.len()))
}

/// Splits a quoted or bare attribute value off the front of `input`.
fn attribute_value(input: &str) -> (&str, &str) {
    if let Some(quote) = input.chars().next().filter(|ch| matches!(ch, '"' | '\'')) {
        let body = &input[1..];
        return match body.find(quote) {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => (body, ""),
        };
    }
    let end = input
        .find(|ch: char| ch.is_ascii_whitespace() || matches!(ch, '>' | '/'))
        .unwrap_or(input.len());
    input.split_at(end)
}

fn name_len(input: &str) -> usize {
    input
        .bytes()
        .take_while(|&byte| byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':'))
        .count()
}

fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Replaces character references; unknown ones are kept verbatim.
pub(crate) fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp + 1..];
        let decoded = candidate
            .find(';')
            .and_then(|semi| Some((decode_entity(&candidate[..semi])?, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let (digits, radix) = match number.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (number, 10),
        };
        return u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32);
    }

    let ch = match name {
        "nbsp" => '\u{a0}',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "bull" => '\u{2022}',
        "middot" => '\u{b7}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "euro" => '\u{20ac}',
        "times" => '\u{d7}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::Token;
    use super::decode_entities;
    use super::tokenize;

    fn start(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> Token {
        Token::Start {
            name: name.to_owned(),
            attrs: attrs
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
            self_closing,
        }
    }

    #[test]
    fn tokenizes_tags_attributes_and_text() {
        let tokens = tokenize(r#"<P Class="a b" data-x=1 hidden>Hi<br/></p >"#);
        assert_eq!(
            tokens,
            vec![
                start("p", &[("class", "a b"), ("data-x", "1"), ("hidden", "")], false),
                Token::Text("Hi".to_owned()),
                start("br", &[], true),
                Token::End {
                    name: "p".to_owned()
                },
            ]
        );
    }

    #[test]
    fn skips_comments_and_doctype() {
        let tokens = tokenize("<!DOCTYPE html><!-- <p>note</p> -->x<?xml?>");
        assert_eq!(tokens, vec![Token::Text("x".to_owned())]);
    }

    #[test]
    fn keeps_raw_text_of_script_as_single_token() {
        let tokens = tokenize("<script>if (a < b) {}</SCRIPT >after");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1], Token::Text("if (a < b) {}".to_owned()));
        assert_eq!(
            tokens[2],
            Token::End {
                name: "script".to_owned()
            }
        );
        assert_eq!(tokens[3], Token::Text("after".to_owned()));
    }

    #[test]
    fn unterminated_raw_text_runs_to_the_end() {
        let tokens = tokenize("<style>p { color: red }");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Token::Text("p { color: red }".to_owned()));
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        let tokens = tokenize("1 < 2 </ 3");
        let text = tokens
            .iter()
            .map(|token| match token {
                Token::Text(text) => text.as_str(),
                _ => "",
            })
            .collect::<String>();
        assert_eq!(text, "1 < 2 </ 3");
    }

    #[test]
    fn attribute_values_decode_entities() {
        let tokens = tokenize("<a title='Tom &amp; Jerry'>");
        assert_eq!(tokens, vec![start("a", &[("title", "Tom & Jerry")], false)]);
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            decode_entities("a&amp;b &#65;&#x42; &unknown; &euro;5 & done"),
            "a&b AB &unknown; \u{20ac}5 & done"
        );
    }
}
