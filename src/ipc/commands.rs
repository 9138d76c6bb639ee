// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Command;

/// A request line received on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcCommand {
    Control(Command),
    Info { json: bool },
    Stop,
}

pub fn parse_command(line: &str) -> Result<IpcCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let rest: Vec<&str> = parts.collect();

    let cmd = match head {
        "start" => IpcCommand::Control(Command::Start),
        "pause" => IpcCommand::Control(Command::Pause),
        "toggle" => IpcCommand::Control(Command::Toggle),
        "lap" => IpcCommand::Control(Command::Lap),
        "reset" => IpcCommand::Control(Command::Reset),
        "clear" => IpcCommand::Control(Command::ClearLaps),
        "stop" => IpcCommand::Stop,
        "info" => {
            return match rest.as_slice() {
                [] => Ok(IpcCommand::Info { json: false }),
                ["--json"] => Ok(IpcCommand::Info { json: true }),
                _ => Err(format!("unexpected arguments to info: {}", rest.join(" "))),
            };
        }
        other => return Err(format!("Unknown command '{other}'")),
    };

    if !rest.is_empty() {
        return Err(format!("'{head}' takes no arguments"));
    }

    Ok(cmd)
}

/// Wire form, the inverse of `parse_command`.
pub fn to_wire(cmd: IpcCommand) -> String {
    match cmd {
        IpcCommand::Control(command) => command.name().to_string(),
        IpcCommand::Info { json: true } => "info --json".to_string(),
        IpcCommand::Info { json: false } => "info".to_string(),
        IpcCommand::Stop => "stop".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_control_commands() {
        assert_eq!(parse_command("start"), Ok(IpcCommand::Control(Command::Start)));
        assert_eq!(parse_command("  lap \n"), Ok(IpcCommand::Control(Command::Lap)));
        assert_eq!(parse_command("clear"), Ok(IpcCommand::Control(Command::ClearLaps)));
        assert_eq!(parse_command("toggle"), Ok(IpcCommand::Control(Command::Toggle)));
    }

    #[test]
    fn parses_info_flags() {
        assert_eq!(parse_command("info"), Ok(IpcCommand::Info { json: false }));
        assert_eq!(parse_command("info --json"), Ok(IpcCommand::Info { json: true }));
        assert!(parse_command("info --yaml").is_err());
    }

    #[test]
    fn rejects_unknown_and_extra_args() {
        assert_eq!(parse_command("jump"), Err("Unknown command 'jump'".to_string()));
        assert!(parse_command("reset now").is_err());
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn wire_form_parses_back() {
        for cmd in [
            IpcCommand::Control(Command::Reset),
            IpcCommand::Control(Command::ClearLaps),
            IpcCommand::Info { json: true },
            IpcCommand::Stop,
        ] {
            assert_eq!(parse_command(&to_wire(cmd)), Ok(cmd));
        }
    }
}
