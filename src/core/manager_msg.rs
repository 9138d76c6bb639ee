// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{
    events::{Command, Event},
    info::Snapshot,
    input::KeyEvent,
};

/// Reply to a control request: the snapshot after the command, plus the
/// reason when the command was a no-op.
#[derive(Debug)]
pub struct ControlReply {
    pub snapshot: Snapshot,
    pub ignored: Option<String>,
}

#[derive(Debug)]
pub enum ManagerMsg {
    Event(Event),

    /// Raw key from the keyboard service, mapped by the daemon against the
    /// current run state.
    Key(KeyEvent),

    Control {
        command: Command,
        reply: oneshot::Sender<ControlReply>,
    },

    GetInfo {
        reply: oneshot::Sender<Snapshot>,
    },

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
