// Author: Dustin Pilgrim
// License: MIT

pub mod client;
pub mod commands;
pub mod router;
pub mod server;

use std::path::PathBuf;

/// `$XDG_RUNTIME_DIR/lapwatch`, or a per-user directory under the system
/// temp dir when no runtime dir is set.
pub fn runtime_dir() -> PathBuf {
    match std::env::var_os("XDG_RUNTIME_DIR") {
        Some(dir) => PathBuf::from(dir).join("lapwatch"),
        None => {
            let uid = unsafe { libc::getuid() };
            std::env::temp_dir().join(format!("lapwatch-{uid}"))
        }
    }
}

pub fn socket_path() -> PathBuf {
    runtime_dir().join("lapwatch.sock")
}
