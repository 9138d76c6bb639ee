// Author: Dustin Pilgrim
// License: MIT

/// Operations a user (keyboard or IPC) can ask of the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    /// pause if running, else start
    Toggle,
    Reset,
    Lap,
    ClearLaps,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Toggle => "toggle",
            Command::Reset => "reset",
            Command::Lap => "lap",
            Command::ClearLaps => "clear",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Periodic sample from the ticker spawned for `generation`.
    Tick {
        now_ms: u64,
        generation: u64,
    },

    Command {
        command: Command,
        now_ms: u64,
    },
}
