// Author: Dustin Pilgrim
// License: MIT

use crate::cli::{Args, Command};
use crate::core::events::Command as StopwatchCommand;
use crate::core::info::Snapshot;
use crate::core::laps::{LapOrder, LapRecorder};
use crate::ipc::commands::{to_wire, IpcCommand};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

fn ipc_command(cmd: &Command) -> IpcCommand {
    match cmd {
        Command::Start => IpcCommand::Control(StopwatchCommand::Start),
        Command::Pause => IpcCommand::Control(StopwatchCommand::Pause),
        Command::Toggle => IpcCommand::Control(StopwatchCommand::Toggle),
        Command::Lap => IpcCommand::Control(StopwatchCommand::Lap),
        Command::Reset => IpcCommand::Control(StopwatchCommand::Reset),
        Command::Clear => IpcCommand::Control(StopwatchCommand::ClearLaps),
        Command::Info { json } => IpcCommand::Info { json: *json },
        Command::Stop => IpcCommand::Stop,
    }
}

/// What `info --json` prints when no instance answers.
fn idle_json() -> String {
    Snapshot::new(false, 0, &LapRecorder::new(), LapOrder::default()).to_json()
}

/// Command mode: forward one request to the running instance and print
/// the reply.
pub async fn run(args: Args) -> Result<(), AnyError> {
    let Some(cmd) = args.command.as_ref() else {
        return Err("no command given".into());
    };

    let request = ipc_command(cmd);

    match crate::ipc::client::send_raw(&to_wire(request)).await {
        Ok(resp) => {
            let out = resp.trim_end();
            if !out.is_empty() {
                println!("{out}");
            }
            Ok(())
        }
        Err(e) => {
            if matches!(request, IpcCommand::Info { json: true }) {
                // status bars need valid JSON on stdout even when nothing is running
                println!("{}", idle_json());
            } else {
                eprintln!("lapwatch: {e}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_commands_map_to_wire_form() {
        assert_eq!(to_wire(ipc_command(&Command::Clear)), "clear");
        assert_eq!(to_wire(ipc_command(&Command::Info { json: true })), "info --json");
        assert_eq!(to_wire(ipc_command(&Command::Toggle)), "toggle");
        assert_eq!(to_wire(ipc_command(&Command::Stop)), "stop");
    }

    #[test]
    fn idle_json_is_a_zeroed_snapshot() {
        let value: serde_json::Value = serde_json::from_str(&idle_json()).unwrap();
        assert_eq!(value["formatted"], "00:00.00");
        assert_eq!(value["running"], false);
        assert_eq!(value["elapsed_ms"], 0);
        assert!(value["laps"].as_array().unwrap().is_empty());
    }
}
