use serde::Deserialize;
use serde::Serialize;

/// Horizontal alignment a renderer can honour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Alignment accepted by the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Justified text is not supported by the renderers and degrades to left.
    pub fn resolved(self) -> TextAlignment {
        match self {
            Self::Left | Self::Justify => TextAlignment::Left,
            Self::Center => TextAlignment::Center,
            Self::Right => TextAlignment::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Alignment;
    use super::TextAlignment;

    #[test]
    fn justify_degrades_to_left() {
        assert_eq!(Alignment::Justify.resolved(), TextAlignment::Left);
        assert_eq!(Alignment::Center.resolved(), TextAlignment::Center);
        assert_eq!(Alignment::Right.resolved(), TextAlignment::Right);
    }
}
