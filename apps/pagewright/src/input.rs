use encoding_rs::Encoding;
use log::debug;
use log::warn;

/// Decodes raw HTML bytes. An explicit label wins, then a byte order mark,
/// then a `charset=` declaration near the top of the document; anything else
/// is read as UTF-8 with replacement characters.
pub fn decode_html(body: &[u8], declared: Option<&str>) -> String {
    if let Some(label) = declared {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) => return decode_with(encoding, body),
            None => warn!("unknown charset `{label}`, falling back to detection"),
        }
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(body) {
        debug!("decoding input as {} (byte order mark)", encoding.name());
        return decode_with(encoding, &body[bom_len..]);
    }

    if let Some(encoding) = meta_encoding(body) {
        debug!("decoding input as {} (charset declaration)", encoding.name());
        return decode_with(encoding, body);
    }

    String::from_utf8_lossy(body).into_owned()
}

fn decode_with(encoding: &'static Encoding, body: &[u8]) -> String {
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        warn!("input is not valid {}; malformed bytes replaced", encoding.name());
    }
    decoded.into_owned()
}

const CHARSET: &[u8] = b"charset=";

/// How far into the document a charset declaration is looked for.
const SNIFF_LIMIT: usize = 1024;

/// Encoding named by the first `charset=` declaration near the top of the
/// document that `encoding_rs` recognises, quoted or bare.
pub fn meta_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(SNIFF_LIMIT)];
    let lower = head.to_ascii_lowercase();

    lower
        .windows(CHARSET.len())
        .enumerate()
        .filter(|(_, window)| *window == CHARSET)
        .find_map(|(at, _)| {
            let value = head[at + CHARSET.len()..].trim_ascii_start();
            let label = match value.split_first() {
                Some((&quote @ (b'"' | b'\''), rest)) => {
                    &rest[..rest.iter().position(|&byte| byte == quote)?]
                }
                _ => {
                    let end = value
                        .iter()
                        .position(|&byte| ends_bare_label(byte))
                        .unwrap_or(value.len());
                    &value[..end]
                }
            };
            Encoding::for_label(label)
        })
}

fn ends_bare_label(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'"' | b'\'' | b';' | b'>' | b'/')
}
