//! Terminal Handle
//!
//! Ties together the color/attribute state, the sequence encoder, and the
//! TTY capability. Every public operation mutates the tracked state where
//! applicable, then synchronously writes the corresponding escape sequence
//! to the descriptor. There is no batching and no deferred flush.

use std::fmt::Write as _;

use crate::seq::Csi;
use crate::style::{Color, FontAttr};
use crate::tty::{TtyFd, TtyIo, WindowSize};

/// Error type for terminal operations
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("Descriptor is not a terminal: {0}")]
    NotATerminal(#[source] nix::errno::Errno),

    #[error("Failed to query terminal size: {0}")]
    SizeQuery(#[source] nix::errno::Errno),

    #[error("Failed to write control sequence: {0}")]
    Write(#[source] nix::errno::Errno),
}

/// Result type for terminal operations
pub type TermResult<T> = Result<T, TermError>;

/// A terminal under control of this library.
///
/// The handle owns the injected TTY capability and tracks the active
/// foreground/background colors and font attributes. It does not track
/// the cursor position: save/restore delegate to the terminal's own
/// single-slot stack, and absolute/relative moves are passed through
/// unchecked, so the terminal itself is the only authority on where the
/// cursor is.
///
/// Every emitting operation takes `&mut self`; sharing a handle across
/// threads requires external serialization.
#[derive(Debug)]
pub struct Terminal<T: TtyIo> {
    /// The injected TTY capability, set once at open
    io: T,
    /// Dimensions captured at open; not re-queried on resize
    size: WindowSize,
    /// Active foreground color
    fg: Color,
    /// Active background color
    bg: Color,
    /// Active font attributes
    attrs: FontAttr,
    /// Reusable sequence format buffer
    buf: String,
}

impl Terminal<TtyFd> {
    /// Open the terminal on the process's standard output
    pub fn stdout() -> TermResult<Self> {
        Self::open(TtyFd::stdout())
    }
}

impl<T: TtyIo> Terminal<T> {
    /// Open a terminal over the given capability.
    ///
    /// Validates that the descriptor is an interactive terminal and
    /// captures its dimensions, then resets colors and attributes to
    /// defaults on both the handle and the terminal itself (one write).
    /// Nothing is written when validation fails.
    pub fn open(io: T) -> TermResult<Self> {
        match io.is_terminal() {
            Ok(true) => {}
            Ok(false) => return Err(TermError::NotATerminal(nix::errno::Errno::ENOTTY)),
            Err(e) => return Err(TermError::NotATerminal(e)),
        }

        let size = io.window_size().map_err(TermError::SizeQuery)?;
        tracing::debug!(cols = size.cols, rows = size.rows, "terminal opened");

        let mut term = Self {
            io,
            size,
            fg: Color::Default,
            bg: Color::Default,
            attrs: FontAttr::empty(),
            buf: String::new(),
        };
        term.reset_attributes()?;
        Ok(term)
    }

    /// Dimensions captured when the terminal was opened
    pub fn size(&self) -> WindowSize {
        self.size
    }

    /// Active foreground color
    pub fn foreground(&self) -> Color {
        self.fg
    }

    /// Active background color
    pub fn background(&self) -> Color {
        self.bg
    }

    /// Active font attributes
    pub fn attributes(&self) -> FontAttr {
        self.attrs
    }

    /// Move the cursor to an absolute 1-based (column, row) position.
    ///
    /// Coordinates are passed through without bounds checking; the
    /// terminal driver clamps or ignores out-of-range values as it sees
    /// fit.
    pub fn set_position(&mut self, col: u16, row: u16) -> TermResult<()> {
        self.emit(Csi::Position { col, row })
    }

    /// Move the cursor relatively by signed column/row deltas.
    ///
    /// Each non-zero axis emits its own sequence, columns first, so one
    /// call performs up to two writes. `move_by(0, 0)` writes nothing.
    pub fn move_by(&mut self, dcol: i32, drow: i32) -> TermResult<()> {
        if dcol != 0 {
            self.emit(Csi::MoveCols(dcol))?;
        }
        if drow != 0 {
            self.emit(Csi::MoveRows(drow))?;
        }
        Ok(())
    }

    /// Save the cursor position in the terminal's single save slot
    pub fn save_position(&mut self) -> TermResult<()> {
        self.emit(Csi::SavePosition)
    }

    /// Restore the cursor position from the terminal's save slot
    pub fn restore_position(&mut self) -> TermResult<()> {
        self.emit(Csi::RestorePosition)
    }

    /// Move the cursor to column 1 of the current row
    pub fn to_line_start(&mut self) -> TermResult<()> {
        self.emit(Csi::LineStart)
    }

    /// Move the cursor to the upper-left cell
    pub fn to_home(&mut self) -> TermResult<()> {
        self.emit(Csi::Home)
    }

    /// Clear the whole screen
    pub fn clear_screen(&mut self) -> TermResult<()> {
        self.emit(Csi::ClearScreen)
    }

    /// Clear the whole current line
    pub fn clear_entire_line(&mut self) -> TermResult<()> {
        self.emit(Csi::ClearLine)
    }

    /// Clear the current line from its start to the cursor
    pub fn clear_line_before(&mut self) -> TermResult<()> {
        self.emit(Csi::ClearLineBefore)
    }

    /// Set the foreground color and re-render the full SGR state
    pub fn set_foreground(&mut self, color: Color) -> TermResult<()> {
        self.fg = color;
        self.render_sgr()
    }

    /// Set the background color and re-render the full SGR state
    pub fn set_background(&mut self, color: Color) -> TermResult<()> {
        self.bg = color;
        self.render_sgr()
    }

    /// Replace the font-attribute mask and re-render the full SGR state
    pub fn set_attributes(&mut self, attrs: FontAttr) -> TermResult<()> {
        self.attrs = attrs;
        self.render_sgr()
    }

    /// OR the given attributes into the mask and re-render
    pub fn add_attributes(&mut self, attrs: FontAttr) -> TermResult<()> {
        self.attrs.insert(attrs);
        self.render_sgr()
    }

    /// Clear the given attributes from the mask and re-render
    pub fn remove_attributes(&mut self, attrs: FontAttr) -> TermResult<()> {
        self.attrs.remove(attrs);
        self.render_sgr()
    }

    /// Reset colors and attributes to terminal defaults and re-render
    pub fn reset_attributes(&mut self) -> TermResult<()> {
        self.fg = Color::Default;
        self.bg = Color::Default;
        self.attrs = FontAttr::empty();
        self.render_sgr()
    }

    /// Emit the full SGR parameter set in one sequence.
    ///
    /// SGR is not incremental: a single parameter cannot be changed in
    /// place on the terminal, so every color/attribute mutation re-sends
    /// the whole set.
    fn render_sgr(&mut self) -> TermResult<()> {
        self.emit(Csi::Sgr {
            fg: self.fg,
            bg: self.bg,
            attrs: self.attrs,
        })
    }

    fn emit(&mut self, seq: Csi) -> TermResult<()> {
        self.buf.clear();
        // Formatting into a String is infallible
        let _ = write!(self.buf, "{seq}");
        tracing::trace!(seq = %self.buf.escape_debug(), "emit");
        self.io.write_all(self.buf.as_bytes()).map_err(TermError::Write)
    }
}
