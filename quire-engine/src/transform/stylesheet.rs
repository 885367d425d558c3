//! Highlighting style sheets: background plus a color and font style per token kind.

use crate::style::{Color, FontStyle};
use std::collections::HashMap;

/// Kinds of tokens produced by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Whitespace,
    Keyword,
    Builtin,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStyle {
    pub color: Color,
    pub style: FontStyle,
}

impl TokenStyle {
    const fn new(color: Color, style: FontStyle) -> Self {
        TokenStyle { color, style }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    name: String,
    background: Color,
    foreground: Color,
    tokens: HashMap<TokenKind, TokenStyle>,
}

impl StyleSheet {
    /// Names accepted by [`StyleSheet::named`].
    pub const NAMES: &'static [&'static str] = &["friendly", "bw"];

    pub fn named(name: &str) -> Option<StyleSheet> {
        match name.to_ascii_lowercase().as_str() {
            "friendly" => Some(Self::friendly()),
            "bw" => Some(Self::bw()),
            _ => None,
        }
    }

    /// Soft colors on a light gray background.
    pub fn friendly() -> StyleSheet {
        let tokens = HashMap::from([
            (
                TokenKind::Comment,
                TokenStyle::new(Color::rgb(0x60, 0xa0, 0xb0), FontStyle::ITALIC),
            ),
            (
                TokenKind::Keyword,
                TokenStyle::new(Color::rgb(0x00, 0x70, 0x20), FontStyle::BOLD),
            ),
            (
                TokenKind::Builtin,
                TokenStyle::new(Color::rgb(0x00, 0x70, 0x20), FontStyle::NORMAL),
            ),
            (
                TokenKind::String,
                TokenStyle::new(Color::rgb(0x40, 0x70, 0xa0), FontStyle::NORMAL),
            ),
            (
                TokenKind::Number,
                TokenStyle::new(Color::rgb(0x40, 0xa0, 0x70), FontStyle::NORMAL),
            ),
            (
                TokenKind::Operator,
                TokenStyle::new(Color::rgb(0x66, 0x66, 0x66), FontStyle::NORMAL),
            ),
        ]);
        StyleSheet {
            name: "friendly".to_string(),
            background: Color::VERY2_LIGHT_GRAY,
            foreground: Color::BLACK,
            tokens,
        }
    }

    /// Black on white, structure carried by font styles only.
    pub fn bw() -> StyleSheet {
        let tokens = HashMap::from([
            (
                TokenKind::Comment,
                TokenStyle::new(Color::BLACK, FontStyle::ITALIC),
            ),
            (
                TokenKind::Keyword,
                TokenStyle::new(Color::BLACK, FontStyle::BOLD),
            ),
            (
                TokenKind::String,
                TokenStyle::new(Color::BLACK, FontStyle::ITALIC),
            ),
        ]);
        StyleSheet {
            name: "bw".to_string(),
            background: Color::WHITE,
            foreground: Color::BLACK,
            tokens,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Style of `kind`; kinds without an entry use the default foreground.
    pub fn style_of(&self, kind: TokenKind) -> TokenStyle {
        self.tokens
            .get(&kind)
            .copied()
            .unwrap_or(TokenStyle::new(self.foreground, FontStyle::NORMAL))
    }

    pub fn foreground_of(&self, kind: TokenKind) -> Color {
        self.style_of(kind).color
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::friendly()
    }
}
