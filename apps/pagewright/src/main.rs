mod cli;
mod images;
mod input;
#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::cli::OutputFormat;
use crate::images::DirectoryImages;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use log::info;
use pw_core::Unit;
use pw_dom::Document;
use pw_html::HtmlParser;
use pw_layout::ImageResolver;
use pw_layout::LayoutEngine;
use pw_layout::LayoutTree;
use pw_layout::NoImages;
use pw_render::TextRenderer;
use pw_style::StyleConfig;
use pw_style::StyleRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output = run(&cli)?;
    print!("{output}");
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let html = input::decode_html(&bytes, cli.charset.as_deref());
    let document = HtmlParser::default().parse(&html);
    let registry = load_registry(cli)?;
    info!(
        "composing {} with {} style rule(s)",
        cli.input.display(),
        registry.rule_count()
    );

    let tree = match &cli.images {
        Some(dir) => layout(&document, &registry, &DirectoryImages::new(dir)),
        None => layout(&document, &registry, &NoImages),
    };

    match cli.format {
        OutputFormat::Text => {
            let renderer = TextRenderer {
                width: cli.width,
                ansi: cli.ansi,
            };
            Ok(renderer.render(&tree).to_text())
        }
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&tree).context("failed to serialize layout")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn layout(
    document: &Document,
    registry: &StyleRegistry,
    images: &dyn ImageResolver,
) -> LayoutTree {
    LayoutEngine.compute(document, registry, images)
}

fn load_registry(cli: &Cli) -> Result<StyleRegistry> {
    let mut config = match &cli.styles {
        Some(path) => StyleConfig::from_path(path)?,
        None => StyleConfig::default(),
    };
    config.replace_defaults |= cli.no_defaults;
    config.clear_class_styles |= cli.clear_class_styles;

    let mut registry = config.build_registry();

    if let Some(padding) = &cli.list_padding {
        let (value, unit) = parse_length(padding)?;
        registry.set_list_vertical_padding(value, unit);
    }
    Ok(registry)
}

/// Parses `12`, `12pt`, `2.5 mm` and the like; a missing unit means points.
fn parse_length(input: &str) -> Result<(f32, Unit)> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|ch: char| !(ch.is_ascii_digit() || ch == '.' || ch == '-'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    if number.is_empty() {
        bail!("length `{input}` has no numeric value");
    }

    let value = number
        .parse::<f32>()
        .with_context(|| format!("invalid length `{input}`"))?;
    let unit = match unit.trim() {
        "" => Unit::Point,
        name => name.parse::<Unit>()?,
    };
    Ok((value, unit))
}
