use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker icon identifiers. Glyphs are the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    BaseStation,
    ReferenceStation,
    SolarStation,
    NeedsRepair,
    #[default]
    General,
    Flag,
}

impl IconKind {
    pub const ALL: [IconKind; 6] = [
        IconKind::BaseStation,
        IconKind::ReferenceStation,
        IconKind::SolarStation,
        IconKind::NeedsRepair,
        IconKind::General,
        IconKind::Flag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::BaseStation => "base-station",
            IconKind::ReferenceStation => "reference-station",
            IconKind::SolarStation => "solar-station",
            IconKind::NeedsRepair => "needs-repair",
            IconKind::General => "general",
            IconKind::Flag => "flag",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IconKind::BaseStation => "Base Station",
            IconKind::ReferenceStation => "Reference Station",
            IconKind::SolarStation => "Solar Station",
            IconKind::NeedsRepair => "Needs Repair",
            IconKind::General => "General",
            IconKind::Flag => "Flag",
        }
    }

    /// Palette color offered for this icon in the customizer
    pub fn default_color(&self) -> Rgb {
        match self {
            IconKind::BaseStation => Rgb::new(0xFF, 0x57, 0x33),
            IconKind::ReferenceStation => Rgb::new(0x33, 0xFF, 0x57),
            IconKind::SolarStation => Rgb::new(0x57, 0x33, 0xFF),
            IconKind::NeedsRepair => Rgb::new(0xFF, 0x33, 0x33),
            IconKind::General => Rgb::new(0x33, 0x66, 0xFF),
            IconKind::Flag => Rgb::new(0xFF, 0x00, 0x00),
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown marker icon {0:?}")]
pub struct ParseIconError(String);

impl FromStr for IconKind {
    type Err = ParseIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKind::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| ParseIconError(s.to_string()))
    }
}

/// 8-bit RGB color, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color {0:?}, expected #RRGGBB")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_str() {
        assert_eq!("general".parse::<IconKind>(), Ok(IconKind::General));
        assert_eq!(
            "needs-repair".parse::<IconKind>(),
            Ok(IconKind::NeedsRepair)
        );
        assert!("General".parse::<IconKind>().is_err());
        assert!("pin".parse::<IconKind>().is_err());
    }

    #[test]
    fn test_icon_serde_matches_as_str() {
        for icon in IconKind::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn test_rgb_parse_and_display() {
        let color: Rgb = "#3366ff".parse().unwrap();
        assert_eq!(color, Rgb::new(0x33, 0x66, 0xFF));
        assert_eq!(color.to_string(), "#3366FF");
    }

    #[test]
    fn test_rgb_rejects_malformed() {
        assert!("3366FF".parse::<Rgb>().is_err());
        assert!("#3366F".parse::<Rgb>().is_err());
        assert!("#GG66FF".parse::<Rgb>().is_err());
        assert!("#33é6F".parse::<Rgb>().is_err());
        // from_str_radix alone would take a leading sign
        assert!("#+F+F+F".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(IconKind::General.default_color().to_string(), "#3366FF");
        assert_eq!(IconKind::BaseStation.default_color().to_string(), "#FF5733");
    }
}
