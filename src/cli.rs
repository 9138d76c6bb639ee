// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lapwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keyboard-driven stopwatch with lap splits"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[arg(long, action)]
    pub no_console: bool,

    /// Run without a terminal UI; control it with the subcommands
    #[arg(long, action)]
    pub headless: bool,

    /// Sampling resolution in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Start the running stopwatch")]
    Start,

    #[command(about = "Pause the stopwatch, keeping elapsed time")]
    Pause,

    #[command(about = "Pause if running, start otherwise")]
    Toggle,

    #[command(about = "Record a lap split")]
    Lap,

    #[command(about = "Stop and zero the stopwatch, dropping all laps")]
    Reset,

    #[command(about = "Drop all laps without touching the clock")]
    Clear,

    #[command(about = "Display elapsed time and laps")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Stop the running lapwatch instance")]
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_in_foreground() {
        let args = Args::try_parse_from(["lapwatch", "--tick-ms", "50"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.tick_ms, Some(50));
        assert!(!args.headless);
    }

    #[test]
    fn info_json_subcommand() {
        let args = Args::try_parse_from(["lapwatch", "info", "--json"]).unwrap();
        assert!(matches!(args.command, Some(Command::Info { json: true })));
    }
}
