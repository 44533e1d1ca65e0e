//! Unix TTY implementation
//!
//! Implements the TTY capability over a raw file descriptor using POSIX
//! APIs: `isatty` for the interactivity check, the `TIOCGWINSZ` ioctl for
//! the size query, and `write(2)` for output.

use std::os::unix::io::RawFd;

use nix::errno::Errno;
use nix::libc::{self, STDOUT_FILENO};
use nix::unistd::{isatty, write};

use super::{TtyIo, WindowSize};

/// TTY capability over a raw file descriptor.
///
/// The descriptor is borrowed, not owned: the caller keeps responsibility
/// for closing it, and dropping a `TtyFd` has no effect on the fd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtyFd {
    fd: RawFd,
}

impl TtyFd {
    /// Wrap an existing descriptor
    pub fn new(fd: RawFd) -> Self {
        Self { fd }
    }

    /// Wrap the process's standard output
    pub fn stdout() -> Self {
        Self::new(STDOUT_FILENO)
    }

    /// Get the wrapped raw file descriptor
    pub fn fd(&self) -> RawFd {
        self.fd
    }
}

impl TtyIo for TtyFd {
    fn is_terminal(&self) -> Result<bool, Errno> {
        isatty(self.fd)
    }

    fn window_size(&self) -> Result<WindowSize, Errno> {
        let mut winsize = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };

        // SAFETY: TIOCGWINSZ is a valid ioctl for querying window size
        let result = unsafe { libc::ioctl(self.fd, libc::TIOCGWINSZ, &mut winsize) };

        if result < 0 {
            Err(Errno::last())
        } else {
            Ok(WindowSize::new(winsize.ws_col, winsize.ws_row))
        }
    }

    fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), Errno> {
        while !bytes.is_empty() {
            let n = write(self.fd, bytes)?;
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::io::AsRawFd;

    use super::*;

    #[test]
    fn test_regular_file_is_not_a_terminal() {
        let file = tempfile::tempfile().expect("failed to create temp file");
        let tty = TtyFd::new(file.as_raw_fd());

        assert_eq!(tty.is_terminal(), Ok(false));
    }

    #[test]
    fn test_window_size_fails_on_regular_file() {
        let file = tempfile::tempfile().expect("failed to create temp file");
        let tty = TtyFd::new(file.as_raw_fd());

        assert!(tty.window_size().is_err());
    }

    #[test]
    fn test_write_all_lands_in_file() {
        use std::io::{Read, Seek, SeekFrom};

        let mut file = tempfile::tempfile().expect("failed to create temp file");
        let mut tty = TtyFd::new(file.as_raw_fd());

        tty.write_all(b"\x1b[2J").expect("write failed");

        file.seek(SeekFrom::Start(0)).expect("seek failed");
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).expect("read failed");
        assert_eq!(contents, b"\x1b[2J");
    }

    #[test]
    fn test_stdout_wraps_fd_one() {
        assert_eq!(TtyFd::stdout().fd(), 1);
    }
}
