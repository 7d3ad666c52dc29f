//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

use super::{hide_cursor, show_cursor};

/// Raw mode with a hidden cursor for the interactive screen.
/// Both are restored on drop, including on early return or panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        hide_cursor();
        Ok(Self { active: true })
    }

    /// Restore the terminal now instead of at drop.
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            show_cursor();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
