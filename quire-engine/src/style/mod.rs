//! Named font and color roles.
//!
//! The [`StyleRegistry`] maps semantic roles ("default-font", "H2-font", "table-header-background",
//! ...) to font descriptors and colors. Lookups never fail: an unregistered role resolves to
//! `None` and the caller picks its own fallback, usually [`StyleRegistry::default_font`].
//!
//! Heading fonts degrade downward: asking for a level that has no registration returns the nearest
//! registered level below it, never one above.

pub mod color;
pub mod font;

pub use color::{Color, ParseColorError};
pub use font::{Font, FontDescriptor, FontStyle, COURIER, DEFAULT_FONT_SIZE, HELVETICA};

use std::collections::HashMap;

pub const DEFAULT_COLOR: &str = "default-color";
pub const DEFAULT_FONT: &str = "default-font";

pub const CODE_FONT: &str = "code-font";

pub const INLINE_CODE_FONT: &str = "inline-code-font";
pub const INLINE_CODE_BACKGROUND: &str = "inline-code-background";

pub const H1_FONT: &str = "H1-font";
pub const H2_FONT: &str = "H2-font";
pub const H3_FONT: &str = "H3-font";
pub const H4_FONT: &str = "H4-font";

pub const TABLE_ALTERNATE_BACKGROUND: &str = "table-alternate-background";
pub const TABLE_HEADER_FONT: &str = "table-header-font";
pub const TABLE_HEADER_BACKGROUND: &str = "table-header-background";
pub const TABLE_BODY_FONT: &str = "table-body-font";

/// Role name of the font used for headings of `level` (`H<level>-font`).
pub fn heading_role(level: usize) -> String {
    format!("H{level}-font")
}

/// Registry of named fonts and colors.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    fonts: HashMap<String, FontDescriptor>,
    colors: HashMap<String, Color>,
}

impl StyleRegistry {
    /// An empty registry. Every lookup falls back to the built-in Helvetica 12 / black.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard document styles.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let default_font =
            FontDescriptor::new(HELVETICA, DEFAULT_FONT_SIZE, FontStyle::NORMAL, Color::BLACK);
        let code_font =
            FontDescriptor::new(COURIER, DEFAULT_FONT_SIZE, FontStyle::NORMAL, Color::BLACK);

        registry.register_color(DEFAULT_COLOR, Color::BLACK);
        registry.register(DEFAULT_FONT, default_font.clone());

        registry.register(CODE_FONT, code_font.clone());
        registry.register(INLINE_CODE_FONT, code_font);
        registry.register_color(INLINE_CODE_BACKGROUND, Color::LIGHT_GRAY);

        registry.register(
            H1_FONT,
            FontDescriptor::new(HELVETICA, 18.0, FontStyle::BOLD, Color::BLACK),
        );
        registry.register(
            H2_FONT,
            FontDescriptor::new(HELVETICA, 16.0, FontStyle::BOLD, Color::DARK_GRAY),
        );
        registry.register(
            H3_FONT,
            FontDescriptor::new(HELVETICA, 14.0, FontStyle::BOLD, Color::DARK_GRAY),
        );
        registry.register(
            H4_FONT,
            FontDescriptor::new(HELVETICA, 14.0, FontStyle::ITALIC, Color::DARK_GRAY),
        );

        registry.register_color(TABLE_ALTERNATE_BACKGROUND, Color::VERY2_LIGHT_GRAY);
        registry.register(
            TABLE_HEADER_FONT,
            FontDescriptor::new(HELVETICA, 14.0, FontStyle::ITALIC, Color::WHITE),
        );
        registry.register_color(TABLE_HEADER_BACKGROUND, Color::BLACK);
        registry.register(TABLE_BODY_FONT, default_font);

        registry
    }

    /// Registers (or replaces) the font descriptor of `role`.
    pub fn register(&mut self, role: impl Into<String>, descriptor: FontDescriptor) {
        self.fonts.insert(role.into(), descriptor);
    }

    /// Registers (or replaces) the color of `role`.
    pub fn register_color(&mut self, role: impl Into<String>, color: Color) {
        self.colors.insert(role.into(), color);
    }

    pub fn descriptor(&self, role: &str) -> Option<&FontDescriptor> {
        self.fonts.get(role)
    }

    /// Font registered for `role`, if any.
    pub fn resolve(&self, role: &str) -> Option<Font> {
        self.fonts.get(role).map(FontDescriptor::font)
    }

    /// Font registered for `role`, with `style` and `color` replacing the registered ones.
    pub fn resolve_with(&self, role: &str, style: FontStyle, color: Color) -> Option<Font> {
        self.fonts.get(role).map(|d| d.font_with(style, color))
    }

    /// Color registered for `role`, if any.
    pub fn resolve_color(&self, role: &str) -> Option<Color> {
        self.colors.get(role).copied()
    }

    pub fn default_font(&self) -> Font {
        self.resolve(DEFAULT_FONT).unwrap_or_default()
    }

    pub fn default_color(&self) -> Color {
        self.resolve_color(DEFAULT_COLOR).unwrap_or(Color::BLACK)
    }

    /// Descriptor for a heading of `level`: the nearest registered level at or below `level`.
    pub fn heading_descriptor(&self, level: usize) -> Option<&FontDescriptor> {
        (1..=level)
            .rev()
            .find_map(|candidate| self.fonts.get(&heading_role(candidate)))
    }

    /// Title font of a section of heading `level`, falling back to the default font.
    pub fn section_title_font(&self, level: usize) -> Font {
        self.heading_descriptor(level)
            .map(FontDescriptor::font)
            .unwrap_or_else(|| self.default_font())
    }

    /// Registered font roles, sorted.
    pub fn font_roles(&self) -> Vec<&str> {
        let mut roles: Vec<_> = self.fonts.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }

    /// Registered color roles, sorted.
    pub fn color_roles(&self) -> Vec<&str> {
        let mut roles: Vec<_> = self.colors.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }
}
