// Author: Dustin Pilgrim
// License: MIT

use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use tokio::sync::{mpsc::Sender, oneshot};
use tokio::task::JoinHandle;

use crate::core::input::{Key, KeyEvent};
use crate::core::manager_msg::ManagerMsg;
use crate::{sdebug, sinfo, swarn};

/// Handle to the terminal key reader. Dropping it aborts the task.
pub struct KeyboardReader {
    handle: JoinHandle<()>,
}

impl Drop for KeyboardReader {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Reads key events from the terminal and forwards the ones the stopwatch
/// cares about. Must be started after the terminal is in raw mode.
pub fn spawn_keyboard_reader(tx: Sender<ManagerMsg>) -> KeyboardReader {
    let handle = tokio::spawn(async move {
        let mut events = EventStream::new();

        while let Some(event) = events.next().await {
            let key = match event {
                Ok(TermEvent::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    swarn!("Keyboard", "terminal read failed: {}", e);
                    break;
                }
            };

            // raw mode swallows SIGINT, so Ctrl+C shows up here as a key
            if is_quit(&key) {
                sinfo!("Keyboard", "Ctrl+C pressed, stopping");
                let (reply, _) = oneshot::channel();
                let _ = tx.send(ManagerMsg::StopDaemon { reply }).await;
                break;
            }

            let Some(key) = translate(&key) else {
                continue;
            };

            if tx.send(ManagerMsg::Key(key)).await.is_err() {
                break;
            }
        }

        sdebug!("Keyboard", "reader finished");
    });

    KeyboardReader { handle }
}

/// Map a terminal key press onto the stopwatch's key model.
///
/// Releases and repeats are dropped. Super (Cmd) and Meta both count as the
/// command modifier; terminals only report them with keyboard enhancement on.
pub fn translate(event: &TermKeyEvent) -> Option<KeyEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let meta = event
        .modifiers
        .intersects(KeyModifiers::SUPER | KeyModifiers::META);

    Some(KeyEvent::new(key, ctrl, meta))
}

fn is_quit(event: &TermKeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
