// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    engine::TimerEngine,
    error::Rejected,
    events::{Command, Event},
    info::Snapshot,
    laps::{LapOrder, LapRecorder},
};

/// Pure coordinator: events in, actions out.
///
/// Owns the engine and the lap history. The daemon owns the ticker and the
/// presenter and executes whatever actions come back. A `Rejected` result
/// means nothing changed.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    engine: TimerEngine,
    laps: LapRecorder,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            engine: TimerEngine::new(),
            laps: LapRecorder::new(),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<Vec<Action>, Rejected> {
        match event {
            Event::Tick { now_ms, generation } => {
                let before = self.engine.current_elapsed();
                let after = self.engine.sample(now_ms, generation)?;
                if after == before {
                    return Ok(Vec::new());
                }
                Ok(vec![Action::Render])
            }

            Event::Command { command, now_ms } => self.handle_command(command, now_ms),
        }
    }

    fn handle_command(&mut self, command: Command, now_ms: u64) -> Result<Vec<Action>, Rejected> {
        match command {
            Command::Start => {
                let generation = self.engine.start(now_ms)?;
                Ok(vec![Action::StartTicker { generation }, Action::Render])
            }

            Command::Pause => {
                self.engine.pause(now_ms)?;
                Ok(vec![Action::StopTicker, Action::Render])
            }

            Command::Toggle => {
                let next = if self.engine.is_running() {
                    Command::Pause
                } else {
                    Command::Start
                };
                self.handle_command(next, now_ms)
            }

            Command::Reset => {
                self.engine.reset();
                self.laps.clear();
                Ok(vec![Action::StopTicker, Action::Render])
            }

            Command::Lap => {
                // sample at the key press so the lap isn't a tick behind
                if self.engine.is_running() {
                    self.engine.sample_now(now_ms)?;
                }
                self.laps
                    .record_lap(self.engine.run_state(), self.engine.current_elapsed())?;
                Ok(vec![Action::Render])
            }

            Command::ClearLaps => {
                if self.laps.is_empty() {
                    return Ok(Vec::new());
                }
                self.laps.clear();
                Ok(vec![Action::Render])
            }
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn laps(&self) -> &LapRecorder {
        &self.laps
    }

    pub fn snapshot(&self, order: LapOrder) -> Snapshot {
        Snapshot::new(
            self.engine.is_running(),
            self.engine.current_elapsed(),
            &self.laps,
            order,
        )
    }
}
