use crate::cli::Cli;
use crate::cli::OutputFormat;
use crate::images::DirectoryImages;
use crate::input::decode_html;
use crate::input::meta_encoding;
use crate::parse_length;
use crate::run;
use clap::Parser;
use pw_core::Unit;
use pw_layout::ImageResolver;
use std::path::Path;
use std::path::PathBuf;

fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let wrote = std::fs::write(&path, contents);
    assert!(wrote.is_ok());
    path
}

fn cli(args: &[&str]) -> Cli {
    let parsed = Cli::try_parse_from(std::iter::once("pagewright").chain(args.iter().copied()));
    assert!(parsed.is_ok());
    parsed.unwrap_or_else(|_| unreachable!())
}

#[test]
fn finds_charset_declarations() {
    let html = "<html><head><meta charset=\"UTF-8\"></head><body>hello</body></html>";
    assert_eq!(meta_encoding(html.as_bytes()), Some(encoding_rs::UTF_8));

    let http_equiv =
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">";
    assert_eq!(meta_encoding(http_equiv.as_bytes()), Some(encoding_rs::WINDOWS_1252));
    assert_eq!(meta_encoding(b"<p>charset=;</p>"), None);
    assert_eq!(
        meta_encoding(b"<p>charset=bogus</p><meta charset='iso-8859-2'>"),
        Some(encoding_rs::ISO_8859_2)
    );
}

#[test]
fn decodes_using_meta_charset() {
    let html = b"<meta charset=\"windows-1252\"><p>caf\xE9</p>";
    assert!(decode_html(html, None).contains("caf\u{e9}"));
}

#[test]
fn explicit_charset_beats_detection() {
    let html = b"<meta charset=\"UTF-8\"><p>\xE2\x82\xAC</p>";
    let decoded = decode_html(html, Some("iso-8859-1"));
    assert!(!decoded.contains('\u{20ac}'));
    assert!(decode_html(html, Some("no-such-charset")).contains('\u{20ac}'));
}

#[test]
fn byte_order_mark_selects_encoding() {
    let mut utf16 = vec![0xFF, 0xFE];
    for unit in "<p>hi</p>".encode_utf16() {
        utf16.extend_from_slice(&unit.to_le_bytes());
    }
    assert_eq!(decode_html(&utf16, None), "<p>hi</p>");
}

#[test]
fn parses_lengths_with_units() {
    let parsed = parse_length("2.5mm").unwrap_or_else(|_| unreachable!());
    assert_eq!(parsed, (2.5, Unit::Millimetre));
    let parsed = parse_length(" 12 ").unwrap_or_else(|_| unreachable!());
    assert_eq!(parsed, (12.0, Unit::Point));
    let parsed = parse_length("1 in").unwrap_or_else(|_| unreachable!());
    assert_eq!(parsed, (1.0, Unit::Inch));
    assert!(parse_length("mm").is_err());
    assert!(parse_length("3 furlongs").is_err());
}

#[test]
fn image_paths_stay_inside_the_root() {
    let images = DirectoryImages::new("/srv/pics");
    assert_eq!(
        images.path_for("a/b.png?v=2"),
        Some(PathBuf::from("/srv/pics/a/b.png"))
    );
    assert_eq!(images.path_for("../secret.png"), None);
    assert_eq!(images.path_for("/etc/passwd"), None);
    assert_eq!(images.path_for("https://example.com/x.png"), None);
    assert_eq!(images.path_for(""), None);
}

#[test]
fn directory_images_read_files() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
    write(dir.path(), "dot.png", &[0x89, b'P', b'N', b'G']);
    let images = DirectoryImages::new(dir.path());
    assert_eq!(images.resolve("dot.png"), Some(vec![0x89, b'P', b'N', b'G']));
    assert_eq!(images.resolve("missing.png"), None);
}

#[test]
fn renders_text_output() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
    let input = write(
        dir.path(),
        "page.html",
        b"<h1>Title</h1><ol><li>one</li><li>two</li></ol>",
    );
    let cli = cli(&[input.to_str().unwrap_or_default()]);
    assert_eq!(cli.format, OutputFormat::Text);

    let output = run(&cli).unwrap_or_else(|_| unreachable!());
    assert_eq!(output, "Title\n\n    1.   one\n    2.   two\n");
}

#[test]
fn renders_json_output_with_styles_file() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
    let input = write(
        dir.path(),
        "page.html",
        b"<ul><li class=\"hot\">Item</li></ul><p><img src=\"a.png\" alt=\"A\"></p>",
    );
    let styles = write(dir.path(), "styles.toml", b"[classes.hot]\nfont_weight = \"bold\"\n");
    write(dir.path(), "a.png", b"png");
    let cli = cli(&[
        input.to_str().unwrap_or_default(),
        "--styles",
        styles.to_str().unwrap_or_default(),
        "--images",
        dir.path().to_str().unwrap_or_default(),
        "--format",
        "json",
    ]);

    let output = run(&cli).unwrap_or_else(|_| unreachable!());
    let value: serde_json::Value =
        serde_json::from_str(&output).unwrap_or_else(|_| unreachable!());
    let items = value["items"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "line");
    assert_eq!(items[0]["marker"]["text"], "\u{2022}  ");
    assert_eq!(items[0]["spans"][0]["text"], "Item");
    assert_eq!(items[0]["spans"][0]["style"]["font_weight"], "bold");
    assert_eq!(items[1]["type"], "image");
    assert_eq!(items[1]["resolved"], true);
}

#[test]
fn no_defaults_drops_stock_styles() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
    let input = write(dir.path(), "page.html", b"<p><b>x</b></p>");
    let styled = run(&cli(&[input.to_str().unwrap_or_default(), "--ansi"]))
        .unwrap_or_else(|_| unreachable!());
    assert!(styled.contains("\u{1b}[1mx"));

    let plain = run(&cli(&[input.to_str().unwrap_or_default(), "--ansi", "--no-defaults"]))
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(plain, "x\n");
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
    let missing = dir.path().join("absent.html");
    let result = run(&cli(&[missing.to_str().unwrap_or_default()]));
    assert!(result.is_err());
}
