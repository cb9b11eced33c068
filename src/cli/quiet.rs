//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::stdin_is_tty;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (passwords only on stdout, no warnings).
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Skip interactive prompts when quiet or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}
