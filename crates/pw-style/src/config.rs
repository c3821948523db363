//! TOML style configuration.

use crate::Alignment;
use crate::ContainerStyle;
use crate::StyleRegistry;
use crate::TextAlignment;
use crate::TextStyle;
use log::info;
use log::warn;
use pw_core::PagewrightError;
use pw_core::PagewrightResult;
use pw_core::Unit;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A length with an explicit unit, e.g. `{ value = 2, unit = "mm" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Length {
    pub value: f32,
    #[serde(default)]
    pub unit: Unit,
}

/// Styles declared in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Start from an empty registry instead of the stock defaults.
    pub replace_defaults: bool,
    /// Drop the class-level tables of the starting registry before applying.
    pub clear_class_styles: bool,
    pub list_vertical_padding: Option<Length>,
    pub tags: BTreeMap<String, TextStyle>,
    pub classes: BTreeMap<String, TextStyle>,
    pub tag_containers: BTreeMap<String, ContainerStyle>,
    pub class_containers: BTreeMap<String, ContainerStyle>,
    pub alignments: BTreeMap<String, Alignment>,
    pub text_alignments: BTreeMap<String, TextAlignment>,
}

impl StyleConfig {
    pub fn from_toml_str(input: &str) -> PagewrightResult<Self> {
        toml::from_str(input)
            .map_err(|error| PagewrightError::new("config.parse", error.to_string()))
    }

    pub fn from_path(path: &Path) -> PagewrightResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|error| {
            PagewrightError::new(
                "config.io",
                format!("failed to read {}: {error}", path.display()),
            )
        })?;
        Self::from_toml_str(&source)
    }

    /// Builds the registry this configuration describes.
    pub fn build_registry(&self) -> StyleRegistry {
        let mut registry = if self.replace_defaults {
            StyleRegistry::empty()
        } else {
            StyleRegistry::with_defaults()
        };
        self.apply_to(&mut registry);
        registry
    }

    /// Registers every entry on top of `registry`. Entries replace existing keys.
    pub fn apply_to(&self, registry: &mut StyleRegistry) {
        if self.clear_class_styles {
            registry.clear_default_class_styles();
        }

        for (tag, style) in usable(&self.tags, "tag") {
            registry.set_text_style_for_tag(tag, style.clone());
        }
        for (class, style) in usable(&self.classes, "class") {
            registry.set_text_style_for_class(class, style.clone());
        }
        for (tag, style) in usable(&self.tag_containers, "tag container") {
            registry.set_container_style_for_tag(tag, style.clone());
        }
        for (class, style) in usable(&self.class_containers, "class container") {
            registry.set_container_style_for_class(class, style.clone());
        }
        for (class, alignment) in usable(&self.alignments, "alignment") {
            registry.set_alignment_for_class(class, *alignment);
        }
        for (class, alignment) in usable(&self.text_alignments, "text alignment") {
            registry.set_text_alignment_for_class(class, *alignment);
        }
        if let Some(padding) = self.list_vertical_padding {
            registry.set_list_vertical_padding(padding.value, padding.unit);
        }

        info!(
            "applied style config: {} tag styles, {} class styles, {} containers, {} alignments",
            self.tags.len(),
            self.classes.len(),
            self.tag_containers.len() + self.class_containers.len(),
            self.alignments.len() + self.text_alignments.len(),
        );
    }
}

/// Entries whose key can never match a tag or class token, i.e. empty keys or
/// keys containing whitespace, are skipped with a warning.
fn usable<'a, V>(
    entries: &'a BTreeMap<String, V>,
    kind: &'static str,
) -> impl Iterator<Item = (&'a str, &'a V)> {
    entries.iter().filter_map(move |(key, value)| {
        if key.is_empty() || key.contains(char::is_whitespace) {
            warn!("skipping {kind} entry `{key}`: keys must be a single token");
            return None;
        }
        Some((key.as_str(), value))
    })
}
