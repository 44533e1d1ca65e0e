//! CSI Sequence Encoding
//!
//! Pure formatting of the control sequences this library emits. Every
//! sequence starts with the CSI prefix (`ESC [`); rendering goes through
//! `Display`, so a sequence can be formatted into any reusable buffer
//! without allocating.

use std::fmt::{self, Display, Formatter};

use crate::style::{Color, FontAttr};

/// Control Sequence Introducer prefix shared by every emitted sequence
pub const CSI: &str = "\x1b[";

/// A single control sequence, ready to render.
///
/// Relative moves select their direction letter by strict comparison
/// against zero: a zero column delta renders as forward (`C`) and a zero
/// row delta as up (`A`). Callers skip zero deltas before constructing
/// these variants, so the boundary case never reaches a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Csi {
    /// Absolute cursor position, 1-based, `ESC[{row};{col}H`
    Position { col: u16, row: u16 },
    /// Horizontal move by a signed column delta, `ESC[{n}C` / `ESC[{n}D`
    MoveCols(i32),
    /// Vertical move by a signed row delta, `ESC[{n}A` / `ESC[{n}B`
    MoveRows(i32),
    /// Full color/attribute state, `ESC[{fg};{bg}[;{attr}...]m`
    Sgr {
        fg: Color,
        bg: Color,
        attrs: FontAttr,
    },
    /// Push the cursor position onto the terminal's save slot, `ESC[s`
    SavePosition,
    /// Pop the saved cursor position, `ESC[u`
    RestorePosition,
    /// Move to column 1 of the current row, `ESC[1G`
    LineStart,
    /// Move to the upper-left cell, `ESC[1;1H`
    Home,
    /// Clear the whole screen, `ESC[2J`
    ClearScreen,
    /// Clear the whole current line, `ESC[2K`
    ClearLine,
    /// Clear from line start to the cursor, `ESC[1K`
    ClearLineBefore,
}

impl Display for Csi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Csi::Position { col, row } => write!(f, "{CSI}{row};{col}H"),
            Csi::MoveCols(delta) => {
                let dir = if delta < 0 { 'D' } else { 'C' };
                write!(f, "{CSI}{}{dir}", delta.unsigned_abs())
            }
            Csi::MoveRows(delta) => {
                let dir = if delta > 0 { 'B' } else { 'A' };
                write!(f, "{CSI}{}{dir}", delta.unsigned_abs())
            }
            Csi::Sgr { fg, bg, attrs } => {
                write!(f, "{CSI}{};{}", fg.fg_code(), bg.bg_code())?;
                for (attr, code) in FontAttr::RENDERED {
                    if attrs.contains(attr) {
                        write!(f, ";{code}")?;
                    }
                }
                f.write_str("m")
            }
            Csi::SavePosition => write!(f, "{CSI}s"),
            Csi::RestorePosition => write!(f, "{CSI}u"),
            Csi::LineStart => write!(f, "{CSI}1G"),
            Csi::Home => write!(f, "{CSI}1;1H"),
            Csi::ClearScreen => write!(f, "{CSI}2J"),
            Csi::ClearLine => write!(f, "{CSI}2K"),
            Csi::ClearLineBefore => write!(f, "{CSI}1K"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position() {
        let seq = Csi::Position { col: 10, row: 20 };
        assert_eq!(seq.to_string(), "\x1b[20;10H");
    }

    #[test]
    fn move_forward() {
        assert_eq!(Csi::MoveCols(5).to_string(), "\x1b[5C");
    }

    #[test]
    fn move_back() {
        assert_eq!(Csi::MoveCols(-5).to_string(), "\x1b[5D");
    }

    #[test]
    fn move_up() {
        assert_eq!(Csi::MoveRows(-3).to_string(), "\x1b[3A");
    }

    #[test]
    fn move_down() {
        assert_eq!(Csi::MoveRows(3).to_string(), "\x1b[3B");
    }

    #[test]
    fn zero_delta_direction_boundary() {
        // Strict comparison: zero maps to forward/up. Unreachable through
        // Terminal::move_by, which skips zero axes.
        assert_eq!(Csi::MoveCols(0).to_string(), "\x1b[0C");
        assert_eq!(Csi::MoveRows(0).to_string(), "\x1b[0A");
    }

    #[test]
    fn extreme_delta_magnitude() {
        assert_eq!(
            Csi::MoveCols(i32::MIN).to_string(),
            format!("\x1b[{}D", 2147483648u32)
        );
    }

    #[test]
    fn sgr_defaults() {
        let seq = Csi::Sgr {
            fg: Color::Default,
            bg: Color::Default,
            attrs: FontAttr::empty(),
        };
        assert_eq!(seq.to_string(), "\x1b[39;49m");
    }

    #[test]
    fn sgr_colors() {
        let seq = Csi::Sgr {
            fg: Color::Red,
            bg: Color::Blue,
            attrs: FontAttr::empty(),
        };
        assert_eq!(seq.to_string(), "\x1b[31;44m");
    }

    #[test]
    fn sgr_attribute_order_is_fixed() {
        let seq = Csi::Sgr {
            fg: Color::Default,
            bg: Color::Default,
            attrs: FontAttr::UNDERLINE | FontAttr::BOLD | FontAttr::FAINT,
        };
        assert_eq!(seq.to_string(), "\x1b[39;49;1;2;4m");
    }

    #[test]
    fn sgr_italic_is_silent() {
        let seq = Csi::Sgr {
            fg: Color::Default,
            bg: Color::Default,
            attrs: FontAttr::ITALIC,
        };
        assert_eq!(seq.to_string(), "\x1b[39;49m");

        let seq = Csi::Sgr {
            fg: Color::Default,
            bg: Color::Default,
            attrs: FontAttr::ITALIC | FontAttr::BOLD | FontAttr::UNDERLINE,
        };
        assert_eq!(seq.to_string(), "\x1b[39;49;1;4m");
    }

    #[test]
    fn fixed_suffix_sequences() {
        assert_eq!(Csi::SavePosition.to_string(), "\x1b[s");
        assert_eq!(Csi::RestorePosition.to_string(), "\x1b[u");
        assert_eq!(Csi::LineStart.to_string(), "\x1b[1G");
        assert_eq!(Csi::Home.to_string(), "\x1b[1;1H");
        assert_eq!(Csi::ClearScreen.to_string(), "\x1b[2J");
        assert_eq!(Csi::ClearLine.to_string(), "\x1b[2K");
        assert_eq!(Csi::ClearLineBefore.to_string(), "\x1b[1K");
    }
}
