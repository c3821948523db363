//! Text style values.

use core::fmt;
use core::str::FromStr;
use pw_core::PagewrightError;
use pw_core::PagewrightResult;
use serde::Deserialize;
use serde::Serialize;

/// 24-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LINK_BLUE: Self = Self::rgb(0x1a, 0x4f, 0xd6);
    pub const HIGHLIGHT: Self = Self::rgb(0xff, 0xf3, 0x8a);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(0xff, 0, 0),
            "green" => Self::rgb(0, 0x80, 0),
            "blue" => Self::rgb(0, 0, 0xff),
            "gray" | "grey" => Self::rgb(0x80, 0x80, 0x80),
            "yellow" => Self::rgb(0xff, 0xff, 0),
            "orange" => Self::rgb(0xff, 0xa5, 0),
            "purple" => Self::rgb(0x80, 0, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PagewrightError;

    fn from_str(input: &str) -> PagewrightResult<Self> {
        let trimmed = input.trim().to_ascii_lowercase();
        if let Some(color) = Self::named(&trimmed) {
            return Ok(color);
        }

        let invalid =
            || PagewrightError::new("style.color_invalid", format!("invalid colour `{input}`"));
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut channels = [0_u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let doubled = format!("{digit}{digit}");
                    *slot = channel(&doubled)?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PagewrightError;

    fn try_from(value: String) -> PagewrightResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black => 900,
        }
    }

    pub fn is_bold(self) -> bool {
        self >= Self::SemiBold
    }
}

/// A set of optional text properties.
///
/// Unset fields mean "inherit". [`TextStyle::apply`] layers one style on top of
/// another; registry lookups select whole styles without merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `self` with every field that `top` sets replaced by `top`'s value.
    pub fn apply(&self, top: &Self) -> Self {
        Self {
            font_family: top.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: top.font_size.or(self.font_size),
            font_weight: top.font_weight.or(self.font_weight),
            italic: top.italic.or(self.italic),
            underline: top.underline.or(self.underline),
            strikethrough: top.strikethrough.or(self.strikethrough),
            color: top.color.or(self.color),
            background: top.background.or(self.background),
            line_height: top.line_height.or(self.line_height),
        }
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn line_height(mut self, factor: f32) -> Self {
        self.line_height = Some(factor);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight.is_some_and(FontWeight::is_bold)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use super::FontWeight;
    use super::TextStyle;

    #[test]
    fn parses_hex_and_named_colours() {
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::rgb(0xff, 0x80, 0)));
        assert_eq!("#0F0".parse::<Color>(), Ok(Color::rgb(0, 0xff, 0)));
        assert_eq!(" Grey ".parse::<Color>(), Ok(Color::rgb(0x80, 0x80, 0x80)));
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn rejects_malformed_colours() {
        for input in ["", "#12", "#gggggg", "ff0000", "#ff00000"] {
            let parsed = input.parse::<Color>();
            assert!(parsed.is_err(), "{input} should not parse");
            if let Err(error) = parsed {
                assert_eq!(error.code, "style.color_invalid");
            }
        }
    }

    #[test]
    fn apply_overrides_only_fields_set_on_top() {
        let base = TextStyle::default()
            .font_size(12.0)
            .color(Color::BLACK)
            .italic();
        let top = TextStyle::default().bold().color(Color::WHITE);
        let layered = base.apply(&top);
        assert_eq!(layered.font_size, Some(12.0));
        assert_eq!(layered.italic, Some(true));
        assert_eq!(layered.color, Some(Color::WHITE));
        assert!(layered.is_bold());
    }

    #[test]
    fn applying_default_is_identity() {
        let base = TextStyle::default().underline().font_family("Serif");
        assert_eq!(base.apply(&TextStyle::default()), base);
        assert!(TextStyle::default().is_empty());
    }

    #[test]
    fn weight_ordering_marks_semibold_and_up_as_bold() {
        assert!(!FontWeight::Medium.is_bold());
        assert!(FontWeight::SemiBold.is_bold());
        assert_eq!(FontWeight::Black.value(), 900);
    }
}
