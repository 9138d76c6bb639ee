// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, IsTerminal};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

// ---------------- single-instance lock ----------------

fn lock_path() -> PathBuf {
    crate::ipc::runtime_dir().join("lapwatch.lock")
}

/// Held for the lifetime of the foreground stopwatch. A stale lock left by a
/// crashed run is detected (nobody answers on it) and replaced.
pub fn acquire_single_instance_lock() -> Result<UnixListener, String> {
    let path = lock_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match UnixListener::bind(&path) {
        Ok(l) => Ok(l),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            match UnixStream::connect(&path) {
                Ok(_) => Err(format!(
                    "lapwatch is already running (another instance holds {})",
                    path.display()
                )),
                Err(_) => {
                    let _ = std::fs::remove_file(&path);
                    UnixListener::bind(&path)
                        .map_err(|e| format!("failed to bind instance lock {}: {e}", path.display()))
                }
            }
        }
        Err(e) => Err(format!("failed to bind instance lock {}: {e}", path.display())),
    }
}

// ---------------- raw terminal ----------------

/// Puts the terminal into raw mode and restores it on drop.
///
/// Where the terminal supports it, keyboard enhancement is pushed as well so
/// Super/Cmd shows up as a modifier.
pub struct RawTerminal {
    enhanced: bool,
}

impl RawTerminal {
    pub fn enable() -> io::Result<Self> {
        if !io::stdin().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is not a terminal (use --headless)",
            ));
        }

        terminal::enable_raw_mode()?;

        let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if enhanced {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }

        Ok(Self { enhanced })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = terminal::disable_raw_mode();
    }
}
