//! Colors and Font Attributes
//!
//! Value types for the text state the terminal handle tracks: the classic
//! eight-color SGR palette and the combinable font-attribute mask.

use bitflags::bitflags;

/// Color enumerant for foreground and background selection.
///
/// Discriminants are the ANSI color offsets; the concrete SGR parameter is
/// derived by adding the foreground (30) or background (40) base, so every
/// derived code lands in 30-39 / 40-49 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// The terminal's configured default color (offset 9).
    #[default]
    Default = 9,
}

impl Color {
    /// SGR parameter selecting this color as the foreground (30-39)
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// SGR parameter selecting this color as the background (40-49)
    pub fn bg_code(self) -> u8 {
        40 + self as u8
    }
}

bitflags! {
    /// Font attribute mask
    ///
    /// Attributes combine with bitwise OR. `ITALIC` is tracked like the
    /// others but the renderer never emits it (SGR 3 support across
    /// terminals was too unreliable); see [`FontAttr::RENDERED`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontAttr: u8 {
        const BOLD = 0x01;
        const FAINT = 0x02;
        const ITALIC = 0x04;
        const UNDERLINE = 0x08;
    }
}

impl FontAttr {
    /// Attributes that render, in emission order, with their SGR codes.
    /// The order is fixed so identical state always yields identical bytes.
    pub const RENDERED: [(FontAttr, u8); 3] = [
        (FontAttr::BOLD, 1),
        (FontAttr::FAINT, 2),
        (FontAttr::UNDERLINE, 4),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_codes() {
        assert_eq!(Color::Red.fg_code(), 31);
        assert_eq!(Color::Green.fg_code(), 32);
        assert_eq!(Color::Yellow.fg_code(), 33);
        assert_eq!(Color::Blue.fg_code(), 34);
        assert_eq!(Color::Magenta.fg_code(), 35);
        assert_eq!(Color::Cyan.fg_code(), 36);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::Default.fg_code(), 39);
    }

    #[test]
    fn test_bg_codes() {
        assert_eq!(Color::Red.bg_code(), 41);
        assert_eq!(Color::White.bg_code(), 47);
        assert_eq!(Color::Default.bg_code(), 49);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::Default);
    }

    #[test]
    fn test_attr_bits() {
        assert_eq!(FontAttr::BOLD.bits(), 0x01);
        assert_eq!(FontAttr::FAINT.bits(), 0x02);
        assert_eq!(FontAttr::ITALIC.bits(), 0x04);
        assert_eq!(FontAttr::UNDERLINE.bits(), 0x08);
    }

    #[test]
    fn test_attr_combination() {
        let mut attrs = FontAttr::BOLD | FontAttr::UNDERLINE;
        assert!(attrs.contains(FontAttr::BOLD));
        assert!(!attrs.contains(FontAttr::FAINT));

        attrs.remove(FontAttr::BOLD);
        assert_eq!(attrs, FontAttr::UNDERLINE);
    }

    #[test]
    fn test_italic_not_in_render_table() {
        assert!(FontAttr::RENDERED
            .iter()
            .all(|(attr, _)| *attr != FontAttr::ITALIC));
    }
}
