//! TTY capability layer
//!
//! This module defines the capability the terminal handle is given at
//! initialization: a TTY check, a window-size query, and the synchronous
//! byte sink. The Unix implementation lives in `unix`; tests substitute
//! in-memory recorders.

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::TtyFd;

use nix::errno::Errno;

/// Capability over one output descriptor.
///
/// Errors are raw OS error codes; the terminal handle wraps them into its
/// own error taxonomy.
pub trait TtyIo {
    /// Whether the descriptor refers to an interactive terminal
    fn is_terminal(&self) -> Result<bool, Errno>;

    /// Current terminal dimensions in character cells
    fn window_size(&self) -> Result<WindowSize, Errno>;

    /// Write the whole buffer, looping over partial writes
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Errno>;
}

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
}

impl WindowSize {
    /// Create a new window size from columns and rows
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
