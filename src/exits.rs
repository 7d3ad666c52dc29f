//! Exit handling: signal handlers and terminal restore.

use crate::terminal::reset_terminal;

/// Put the tty back into cooked mode using termios directly.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit path that reaches libc exit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Only emit escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                b"\x1b[0m\x1b[?25h".as_ptr() as *const libc::c_void,
                10,
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
    disable_core_dumps();
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

/// Restore the terminal on startup in case a previous run died in raw mode.
pub fn reset() {
    restore_termios();
    reset_terminal();
}
