// Author: Dustin Pilgrim
// License: MIT

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic milliseconds since the process started.
///
/// Every timestamp fed into the stopwatch comes from here, so wall-clock
/// adjustments (NTP, suspend/resume of the system clock) can't move time
/// backwards.
pub fn now_ms() -> u64 {
    PROCESS_START.elapsed().as_millis() as u64
}

/// Human-readable duration for log lines.
pub fn format_duration(dur: Duration) -> String {
    let secs = dur.as_secs();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        let minutes = secs / 60;
        let seconds = secs % 60;
        format!("{}m {}s", minutes, seconds)
    } else {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    }
}
