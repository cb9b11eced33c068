//! Raw mode RAII guard and tty detection.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// True when stdin is a terminal we can put into raw mode.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// True when stdout is a terminal (escape codes are safe to emit).
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Raw mode for the lifetime of the guard.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode. Fails when stdin is not a terminal.
    pub fn new() -> io::Result<Self> {
        if !stdin_is_tty() {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "stdin is not a tty"));
        }
        enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}
