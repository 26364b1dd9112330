//! Ctrl-C handling: print a notice and exit with status 1

pub const CANCELLED: &str = "\nOperation cancelled by user.\n";

#[cfg(unix)]
pub fn install() {
    extern "C" fn on_interrupt(_: libc::c_int) {
        // only async-signal-safe calls in here
        unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                CANCELLED.as_ptr() as *const libc::c_void,
                CANCELLED.len(),
            );
            libc::_exit(1);
        }
    }

    unsafe {
        libc::signal(libc::SIGINT, on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t);
    }
}

#[cfg(windows)]
pub fn install() {
    use windows_sys::Win32::Foundation::BOOL;
    use windows_sys::Win32::System::Console::{SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_C_EVENT};

    unsafe extern "system" fn on_ctrl(ctrl_type: u32) -> BOOL {
        if ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT {
            print!("{}", CANCELLED);
            std::process::exit(1);
        }
        0
    }

    unsafe {
        if SetConsoleCtrlHandler(Some(on_ctrl), 1) == 0 {
            tracing::debug!("could not install console control handler");
        }
    }
}

#[cfg(not(any(unix, windows)))]
pub fn install() {}
