//! Named color palettes.
//!
//! A palette maps semantic roles (primary, background, success, warning,
//! danger, accent) plus the text and surface roles the slide layouts need
//! to RGB colors. Palettes are compiled in and looked up by name through a
//! perfect hash map.

use crate::common::error::{Error, Result};
use crate::ooxml::pptx::ThemeColors;
use phf::phf_map;
use std::fmt;
use std::str::FromStr;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Uppercase hex form without `#`, as DrawingML `srgbClr` expects.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Recognized palette names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Default,
    Iceberg,
}

impl PaletteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Iceberg => "iceberg",
        }
    }

    /// The palette this name selects.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Default => &DEFAULT,
            Self::Iceberg => &ICEBERG,
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        PALETTES.get(key.as_str()).map(|p| p.name).ok_or_else(|| {
            Error::Configuration(format!(
                "unknown palette '{}' (expected one of: {})",
                s.trim(),
                palette_names().join(", ")
            ))
        })
    }
}

/// Band colors of the iceberg problem slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcebergBands {
    /// Above-water band
    pub sky: Rgb,
    /// Below-water band
    pub ocean: Rgb,
    /// Visible tip
    pub ice: Rgb,
    /// Submerged mass
    pub ice_deep: Rgb,
}

/// A named set of colors applied to every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: PaletteName,
    pub primary: Rgb,
    pub primary_dark: Rgb,
    pub background: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
    pub accent: Rgb,
    /// Body text and action titles
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    /// Card fill
    pub surface: Rgb,
    /// Fill of secondary diagram boxes
    pub subtle: Rgb,
    /// Fill of the risk callout
    pub danger_fill: Rgb,
    /// Label color on primary-filled cards
    pub on_primary: Rgb,
    pub iceberg: Option<IcebergBands>,
}

impl Palette {
    /// Look up a palette by name.
    pub fn by_name(name: &str) -> Result<&'static Palette> {
        name.parse::<PaletteName>().map(|n| n.palette())
    }

    /// Colors used for stat cards, in card order.
    pub fn series(&self) -> [Rgb; 3] {
        [self.primary, self.success, self.accent]
    }

    /// Theme color scheme matching this palette.
    pub fn theme_colors(&self) -> ThemeColors {
        ThemeColors {
            dark1: self.text.hex(),
            light1: self.surface.hex(),
            dark2: self.primary_dark.hex(),
            light2: self.background.hex(),
            accents: [
                self.primary.hex(),
                self.success.hex(),
                self.accent.hex(),
                self.warning.hex(),
                self.danger.hex(),
                self.muted.hex(),
            ],
            hyperlink: self.primary.hex(),
            followed_hyperlink: self.accent.hex(),
        }
    }
}

static DEFAULT: Palette = Palette {
    name: PaletteName::Default,
    primary: Rgb::from_u32(0x0066CC),
    primary_dark: Rgb::from_u32(0x0052A3),
    background: Rgb::from_u32(0xFFFFFF),
    success: Rgb::from_u32(0x10B981),
    warning: Rgb::from_u32(0xD97706),
    danger: Rgb::from_u32(0xDC2626),
    accent: Rgb::from_u32(0x8B5CF6),
    text: Rgb::from_u32(0x1E293B),
    muted: Rgb::from_u32(0x64748B),
    border: Rgb::from_u32(0xE2E8F0),
    surface: Rgb::from_u32(0xFFFFFF),
    subtle: Rgb::from_u32(0xF8FAFC),
    danger_fill: Rgb::from_u32(0xFEE2E2),
    on_primary: Rgb::from_u32(0xA0C4E8),
    iceberg: None,
};

static ICEBERG: Palette = Palette {
    name: PaletteName::Iceberg,
    primary: Rgb::from_u32(0x0369A1),
    primary_dark: Rgb::from_u32(0x075985),
    background: Rgb::from_u32(0xF0F9FF),
    success: Rgb::from_u32(0x0D9488),
    warning: Rgb::from_u32(0xD97706),
    danger: Rgb::from_u32(0xDC2626),
    accent: Rgb::from_u32(0x6366F1),
    text: Rgb::from_u32(0x0C4A6E),
    muted: Rgb::from_u32(0x64748B),
    border: Rgb::from_u32(0xBAE6FD),
    surface: Rgb::from_u32(0xFFFFFF),
    subtle: Rgb::from_u32(0xE0F2FE),
    danger_fill: Rgb::from_u32(0xFEE2E2),
    on_primary: Rgb::from_u32(0xBAE6FD),
    iceberg: Some(IcebergBands {
        sky: Rgb::from_u32(0xE0F2FE),
        ocean: Rgb::from_u32(0x0C4A6E),
        ice: Rgb::from_u32(0xFFFFFF),
        ice_deep: Rgb::from_u32(0x7DD3FC),
    }),
};

static PALETTES: phf::Map<&'static str, &'static Palette> = phf_map! {
    "default" => &DEFAULT,
    "iceberg" => &ICEBERG,
};

/// Names of all recognized palettes, sorted.
pub fn palette_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PALETTES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("default".parse::<PaletteName>().unwrap(), PaletteName::Default);
        assert_eq!("  ICEBERG ".parse::<PaletteName>().unwrap(), PaletteName::Iceberg);
    }

    #[test]
    fn test_unknown_palette_is_configuration_error() {
        let err = "neon".parse::<PaletteName>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("default, iceberg"));
    }

    #[test]
    fn test_only_iceberg_has_bands() {
        assert!(Palette::by_name("default").unwrap().iceberg.is_none());
        assert!(Palette::by_name("iceberg").unwrap().iceberg.is_some());
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::from_u32(0x0066CC).hex(), "0066CC");
        assert_eq!(Rgb(1, 2, 255).to_string(), "#0102FF");
    }

    #[test]
    fn test_theme_colors_follow_palette() {
        let palette = PaletteName::Default.palette();
        let theme = palette.theme_colors();
        assert_eq!(theme.dark1, "1E293B");
        assert_eq!(theme.accents[0], "0066CC");
    }
}
