// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;
use crate::swarn;

use super::commands::{parse_command, IpcCommand};

/// Routes one request line to the daemon and renders the reply text.
pub async fn route_command(cmd: &str, tx: &mpsc::Sender<ManagerMsg>) -> String {
    let parsed = match parse_command(cmd) {
        Ok(c) => c,
        Err(e) => {
            swarn!("Router", "Rejected IPC command '{}': {}", cmd, e);
            return format!("ERROR: {e}");
        }
    };

    match parsed {
        IpcCommand::Control(command) => {
            let (reply_tx, reply_rx) = oneshot::channel();
            if tx.send(ManagerMsg::Control { command, reply: reply_tx }).await.is_err() {
                return "ERROR: lapwatch is shutting down".to_string();
            }

            match reply_rx.await {
                Ok(reply) => match reply.ignored {
                    Some(reason) => format!(
                        "ignored: {} ({})\n{}",
                        command.name(),
                        reason,
                        reply.snapshot.pretty_text()
                    ),
                    None => reply.snapshot.pretty_text(),
                },
                Err(_) => "ERROR: No response from daemon".to_string(),
            }
        }

        IpcCommand::Info { json } => {
            let (reply_tx, reply_rx) = oneshot::channel();
            if tx.send(ManagerMsg::GetInfo { reply: reply_tx }).await.is_err() {
                return "ERROR: lapwatch is shutting down".to_string();
            }

            match reply_rx.await {
                Ok(snapshot) if json => snapshot.to_json(),
                Ok(snapshot) => snapshot.pretty_text(),
                Err(_) => "ERROR: No response from daemon".to_string(),
            }
        }

        IpcCommand::Stop => {
            let (reply_tx, reply_rx) = oneshot::channel();
            if tx.send(ManagerMsg::StopDaemon { reply: reply_tx }).await.is_err() {
                return "lapwatch not running".to_string();
            }

            match reply_rx.await {
                Ok(Ok(msg)) => msg,
                Ok(Err(e)) => format!("ERROR: {e}"),
                Err(_) => "ERROR: No response from daemon".to_string(),
            }
        }
    }
}
