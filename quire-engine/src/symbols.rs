//! Icon-font symbols
//!
//! Maps icon names to their FontAwesome code points so they can be embedded as inline
//! [`Symbol`] elements. Bullet lists use the `circle` icon as their item marker.

use crate::element::Symbol;
use crate::style::Color;

/// Code point of the icon `name`, if known.
pub fn glyph(name: &str) -> Option<char> {
    let code = match name {
        "circle" => '\u{f111}',
        "circle-o" => '\u{f10c}',
        "square" => '\u{f0c8}',
        "square-o" => '\u{f096}',
        "check" => '\u{f00c}',
        "check-square" => '\u{f14a}',
        "times" => '\u{f00d}',
        "plus" => '\u{f067}',
        "minus" => '\u{f068}',
        "star" => '\u{f005}',
        "heart" => '\u{f004}',
        "info" | "info-circle" => '\u{f05a}',
        "warning" | "exclamation-triangle" => '\u{f071}',
        "lightbulb" => '\u{f0eb}',
        "caret-right" => '\u{f0da}',
        "arrow-right" => '\u{f061}',
        "book" => '\u{f02d}',
        "cog" => '\u{f013}',
        "user" => '\u{f007}',
        _ => return None,
    };
    Some(code)
}

/// Symbol element for the icon `name`.
pub fn symbol(name: &str, size: f32, color: Color) -> Option<Symbol> {
    glyph(name).map(|glyph| Symbol {
        name: name.to_string(),
        glyph,
        size,
        color,
    })
}
