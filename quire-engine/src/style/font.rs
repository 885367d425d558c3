//! Font descriptions handed to the layout backend.
//!
//! A [`FontDescriptor`] is the registered, immutable description of a role's font. Resolving it
//! yields a [`Font`], the value carried by every text run. Fonts are plain values: deriving a bold
//! or recolored variant copies the font rather than mutating a shared instance.

use super::color::Color;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

pub const HELVETICA: &str = "Helvetica";
pub const COURIER: &str = "Courier";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Style flags of a font. Flags combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle(u8);

impl FontStyle {
    pub const NORMAL: FontStyle = FontStyle(0);
    pub const BOLD: FontStyle = FontStyle(1);
    pub const ITALIC: FontStyle = FontStyle(1 << 1);
    pub const UNDERLINE: FontStyle = FontStyle(1 << 2);
    pub const STRIKETHROUGH: FontStyle = FontStyle(1 << 3);

    const NAMES: [(FontStyle, &'static str); 4] = [
        (FontStyle::BOLD, "bold"),
        (FontStyle::ITALIC, "italic"),
        (FontStyle::UNDERLINE, "underline"),
        (FontStyle::STRIKETHROUGH, "strikethrough"),
    ];

    pub fn contains(self, other: FontStyle) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_normal(self) -> bool {
        self.0 == 0
    }

    /// Parses a single flag name (`bold`, `italic`, `underline`, `strikethrough`, `normal`).
    pub fn from_name(name: &str) -> Option<FontStyle> {
        if name.eq_ignore_ascii_case("normal") {
            return Some(FontStyle::NORMAL);
        }
        Self::NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(style, _)| *style)
    }

    /// Names of the set flags, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(style, _)| self.contains(*style))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for FontStyle {
    type Output = FontStyle;

    fn bitor(self, rhs: FontStyle) -> FontStyle {
        FontStyle(self.0 | rhs.0)
    }
}

impl BitOrAssign for FontStyle {
    fn bitor_assign(&mut self, rhs: FontStyle) {
        self.0 |= rhs.0;
    }
}

impl Serialize for FontStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FontStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(FontStyle::NORMAL, |acc, name| {
            FontStyle::from_name(name)
                .map(|style| acc | style)
                .ok_or_else(|| de::Error::custom(format!("unknown font style '{name}'")))
        })
    }
}

/// A resolved font: what a text run is painted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub style: FontStyle,
    pub color: Color,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle, color: Color) -> Self {
        Font {
            family: family.into(),
            size,
            style,
            color,
        }
    }

    /// Copy of this font with `style` added to the current flags.
    pub fn with_style(&self, style: FontStyle) -> Font {
        Font {
            style: self.style | style,
            ..self.clone()
        }
    }

    pub fn bold(&self) -> Font {
        self.with_style(FontStyle::BOLD)
    }

    pub fn with_color(&self, color: Color) -> Font {
        Font {
            color,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: f32) -> Font {
        Font {
            size,
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new(HELVETICA, DEFAULT_FONT_SIZE, FontStyle::NORMAL, Color::BLACK)
    }
}

/// Registered description of a font role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub style: FontStyle,
    #[serde(default = "default_descriptor_color")]
    pub color: Color,
}

fn default_descriptor_color() -> Color {
    Color::BLACK
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle, color: Color) -> Self {
        FontDescriptor {
            family: family.into(),
            size,
            style,
            color,
        }
    }

    pub fn font(&self) -> Font {
        Font::new(self.family.clone(), self.size, self.style, self.color)
    }

    /// Same family and size, with the given style and color instead of the registered ones.
    pub fn font_with(&self, style: FontStyle, color: Color) -> Font {
        Font::new(self.family.clone(), self.size, style, color)
    }
}
