// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::core::info::Snapshot;
use crate::sdebug;

/// Observes stopwatch state. Never mutates it; changes go back through
/// commands only.
pub trait Presenter: Send {
    fn render(&mut self, snapshot: &Snapshot);

    fn teardown(&mut self) {}
}

/// Headless mode: nothing to draw, state is only reachable over IPC.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, snapshot: &Snapshot) {
        // ticks would flood the log
        if !snapshot.running {
            sdebug!("Presenter", "{} [{}]", snapshot.formatted, snapshot.status());
        }
    }
}

const MAX_VISIBLE_LAPS: usize = 20;

/// Full-screen renderer for a raw-mode terminal.
///
/// Raw mode disables output post-processing, so every line ends in "\r\n".
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    hidden_cursor: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            hidden_cursor: false,
        }
    }

    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if !self.hidden_cursor {
            queue!(self.out, cursor::Hide)?;
            self.hidden_cursor = true;
        }
        queue!(self.out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

        let (color, label) = if snapshot.running {
            (Color::Green, "RUNNING")
        } else {
            (
                Color::DarkGrey,
                if snapshot.elapsed_ms == 0 { "READY" } else { "PAUSED" },
            )
        };

        queue!(
            self.out,
            Print("\r\n   "),
            SetAttribute(Attribute::Bold),
            Print(&snapshot.formatted),
            SetAttribute(Attribute::Reset),
            Print("   "),
            SetForegroundColor(color),
            Print(label),
            ResetColor,
            Print("\r\n\r\n"),
            SetAttribute(Attribute::Dim),
            Print("   space start/pause · ctrl+l lap · ctrl+r reset · ctrl+c quit"),
            SetAttribute(Attribute::Reset),
            Print("\r\n"),
        )?;

        if !snapshot.laps.is_empty() {
            queue!(self.out, Print("\r\n   Lap   Split      Total\r\n"))?;

            for lap in snapshot.laps.iter().take(MAX_VISIBLE_LAPS) {
                if lap.fastest {
                    queue!(self.out, SetForegroundColor(Color::Green))?;
                } else if lap.slowest {
                    queue!(self.out, SetForegroundColor(Color::Red))?;
                }
                queue!(
                    self.out,
                    Print(format!(
                        "   {:>3}   {:<9}  {}",
                        lap.sequence, lap.split, lap.cumulative
                    )),
                    ResetColor,
                    Print("\r\n"),
                )?;
            }

            let hidden = snapshot.laps.len().saturating_sub(MAX_VISIBLE_LAPS);
            if hidden > 0 {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Dim),
                    Print(format!("   … {hidden} more")),
                    SetAttribute(Attribute::Reset),
                    Print("\r\n"),
                )?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Err(e) = self.draw(snapshot) {
            // a closed terminal is not worth crashing over
            sdebug!("Presenter", "draw failed: {}", e);
        }
    }

    fn teardown(&mut self) {
        let _ = queue!(self.out, cursor::Show, Print("\r\n"));
        let _ = self.out.flush();
        self.hidden_cursor = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::RunState;
    use crate::core::laps::{LapOrder, LapRecorder};

    fn ansi(command: impl crossterm::Command) -> String {
        let mut s = String::new();
        command.write_ansi(&mut s).unwrap();
        s
    }

    fn snapshot(running: bool, elapsed: u64, laps: &[u64]) -> Snapshot {
        let mut rec = LapRecorder::new();
        for &c in laps {
            rec.record_lap(RunState::Running, c).unwrap();
        }
        Snapshot::new(running, elapsed, &rec, LapOrder::NewestFirst)
    }

    fn rendered(snap: &Snapshot) -> String {
        let mut presenter = TerminalPresenter::new(Vec::<u8>::new());
        presenter.render(snap);
        String::from_utf8(presenter.out).unwrap()
    }

    #[test]
    fn frame_shows_time_and_state() {
        let out = rendered(&snapshot(true, 61_005, &[]));
        assert!(out.contains("01:01.00"));
        assert!(out.contains("RUNNING"));
        assert!(out.starts_with(&ansi(cursor::Hide)));
    }

    #[test]
    fn frame_lists_laps_newest_first() {
        let out = rendered(&snapshot(false, 4_000, &[1_000, 2_500, 4_000]));
        assert!(out.contains("PAUSED"));

        // lap 2 total, then lap 1's line
        let second = out.find("00:02.50").unwrap();
        let first = out.find("00:01.00").unwrap();
        assert!(second < first);
    }

    #[test]
    fn long_history_is_truncated() {
        let cumulative: Vec<u64> = (1..=25).map(|i| i * 1_000).collect();
        let out = rendered(&snapshot(true, 25_000, &cumulative));
        assert!(out.contains("5 more"));
    }

    #[test]
    fn teardown_restores_cursor() {
        let mut presenter = TerminalPresenter::new(Vec::<u8>::new());
        presenter.render(&snapshot(false, 0, &[]));
        presenter.teardown();
        let out = String::from_utf8(presenter.out).unwrap();
        assert!(out.contains(&ansi(cursor::Show)));
        assert!(out.contains("READY"));
    }
}
