// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// Why an operation left the stopwatch untouched.
///
/// Every stopwatch operation is total: an invalid call degrades to a no-op.
/// The reason is only surfaced so the daemon can log it and IPC replies can
/// explain why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// start while already running
    AlreadyRunning,

    /// pause or lap while stopped, or a tick after pause
    NotRunning,

    /// lap at zero elapsed time
    ZeroElapsed,

    /// lap whose elapsed value does not exceed the previous lap
    NotAdvanced,

    /// tick from a ticker that has since been cancelled
    StaleTick,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::AlreadyRunning =>
                write!(f, "already running"),
            Rejected::NotRunning =>
                write!(f, "not running"),
            Rejected::ZeroElapsed =>
                write!(f, "no time elapsed yet"),
            Rejected::NotAdvanced =>
                write!(f, "no time elapsed since the last lap"),
            Rejected::StaleTick =>
                write!(f, "stale tick"),
        }
    }
}

impl std::error::Error for Rejected {}
