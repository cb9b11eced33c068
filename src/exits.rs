//! Exit handling: signal handlers, terminal cleanup, core dump hardening.

/// Put the tty back in cooked mode with echo.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit, including
/// `process::exit` from the input loop.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                seq.as_ptr() as *const libc::c_void,
                seq.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through atexit so the terminal is restored.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps and ptrace.
pub fn harden_process() {
    #[cfg(target_os = "linux")]
    unsafe {
        if libc::prctl(libc::PR_SET_DUMPABLE, 0) != 0 {
            log::warn!("prctl(PR_SET_DUMPABLE) failed; core dumps stay enabled");
        }
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}
