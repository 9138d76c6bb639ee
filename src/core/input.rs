// Author: Dustin Pilgrim
// License: MIT

use crate::core::{engine::RunState, events::Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS, Super elsewhere. Treated the same as ctrl.
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: Key, ctrl: bool, meta: bool) -> Self {
        Self { key, ctrl, meta }
    }

    #[cfg(test)]
    pub fn plain(key: Key) -> Self {
        Self::new(key, false, false)
    }

    #[cfg(test)]
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), true, false)
    }

    fn command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Result of mapping a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Command,
    /// The platform must not also act on this key (scroll, reload, clear screen).
    pub prevent_default: bool,
}

/// Fixed key bindings:
///
/// - Space: pause when running, start otherwise
/// - Ctrl/Cmd+R: reset
/// - Ctrl/Cmd+L: lap
///
/// Anything else is left to the platform.
pub fn dispatch(event: &KeyEvent, run_state: RunState) -> Option<Dispatch> {
    let command = match event.key {
        Key::Space if !event.command_modifier() => match run_state {
            RunState::Running => Command::Pause,
            RunState::Stopped => Command::Start,
        },
        Key::Char(c) if event.command_modifier() => match c.to_ascii_lowercase() {
            'r' => Command::Reset,
            'l' => Command::Lap,
            _ => return None,
        },
        _ => return None,
    };

    Some(Dispatch {
        command,
        prevent_default: true,
    })
}
