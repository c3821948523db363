//! Length units accepted by the configuration surface.
//!
//! Everything is stored internally in points (1/72 inch).

use crate::PagewrightError;
use crate::PagewrightResult;
use core::fmt;
use core::str::FromStr;
use serde::Deserialize;
use serde::Serialize;

const POINTS_PER_INCH: f32 = 72.0;
const INCHES_PER_CENTIMETRE: f32 = 1.0 / 2.54;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    #[serde(alias = "pt")]
    Point,
    #[serde(alias = "m")]
    Meter,
    #[serde(alias = "cm")]
    Centimetre,
    #[serde(alias = "mm")]
    Millimetre,
    #[serde(alias = "ft")]
    Feet,
    #[serde(alias = "in")]
    Inch,
    Mil,
}

impl Unit {
    pub fn points_per_unit(self) -> f32 {
        match self {
            Self::Point => 1.0,
            Self::Meter => 100.0 * INCHES_PER_CENTIMETRE * POINTS_PER_INCH,
            Self::Centimetre => INCHES_PER_CENTIMETRE * POINTS_PER_INCH,
            Self::Millimetre => 0.1 * INCHES_PER_CENTIMETRE * POINTS_PER_INCH,
            Self::Feet => 12.0 * POINTS_PER_INCH,
            Self::Inch => POINTS_PER_INCH,
            Self::Mil => POINTS_PER_INCH / 1000.0,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Point => "pt",
            Self::Meter => "m",
            Self::Centimetre => "cm",
            Self::Millimetre => "mm",
            Self::Feet => "ft",
            Self::Inch => "in",
            Self::Mil => "mil",
        }
    }
}

/// Converts `value` expressed in `unit` to points.
pub fn to_points(value: f32, unit: Unit) -> f32 {
    value * unit.points_per_unit()
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Unit {
    type Err = PagewrightError;

    fn from_str(input: &str) -> PagewrightResult<Self> {
        let unit = match input.trim().to_ascii_lowercase().as_str() {
            "pt" | "point" | "points" => Self::Point,
            "m" | "meter" | "metre" => Self::Meter,
            "cm" | "centimetre" | "centimeter" => Self::Centimetre,
            "mm" | "millimetre" | "millimeter" => Self::Millimetre,
            "ft" | "feet" | "foot" => Self::Feet,
            "in" | "inch" | "inches" => Self::Inch,
            "mil" => Self::Mil,
            other => {
                return Err(PagewrightError::new(
                    "unit.unknown",
                    format!("unsupported unit `{other}` (expected: pt|m|cm|mm|ft|in|mil)"),
                ));
            }
        };
        Ok(unit)
    }
}
