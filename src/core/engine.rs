// Author: Dustin Pilgrim
// License: MIT

use crate::core::error::Rejected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Elapsed-time state of the stopwatch.
///
/// Time is always derived from clock deltas (`now - origin + accumulated`),
/// never from counting ticks, so a late or skipped tick can only delay a
/// sample and never skews the total.
#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    state: RunState,

    // Elapsed time folded in by previous run segments.
    accumulated_ms: u64,

    // Clock reading when the current run segment started.
    origin_ms: u64,

    // Last sampled value; what readers see.
    elapsed_ms: u64,

    // Bumped on every start. Ticks carry the generation they were spawned with.
    generation: u64,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stopped -> Running. Returns the tick generation for the new run segment.
    pub fn start(&mut self, now_ms: u64) -> Result<u64, Rejected> {
        if self.state == RunState::Running {
            return Err(Rejected::AlreadyRunning);
        }

        self.accumulated_ms = self.elapsed_ms;
        self.origin_ms = now_ms;
        self.generation = self.generation.wrapping_add(1);
        self.state = RunState::Running;

        Ok(self.generation)
    }

    /// Running -> Stopped. Takes a final sample at `now_ms` and freezes it.
    pub fn pause(&mut self, now_ms: u64) -> Result<(), Rejected> {
        if self.state != RunState::Running {
            return Err(Rejected::NotRunning);
        }

        self.elapsed_ms = self.compute(now_ms);
        self.accumulated_ms = self.elapsed_ms;
        self.state = RunState::Stopped;

        Ok(())
    }

    /// Back to a fresh stopwatch. Valid in any state.
    ///
    /// The generation is kept (and bumped) so ticks from a ticker that was
    /// running before the reset can never match a later run.
    pub fn reset(&mut self) {
        self.state = RunState::Stopped;
        self.accumulated_ms = 0;
        self.origin_ms = 0;
        self.elapsed_ms = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Periodic sample driven by the ticker.
    pub fn sample(&mut self, now_ms: u64, generation: u64) -> Result<u64, Rejected> {
        if self.state != RunState::Running {
            return Err(Rejected::NotRunning);
        }
        if generation != self.generation {
            return Err(Rejected::StaleTick);
        }

        self.elapsed_ms = self.compute(now_ms);
        Ok(self.elapsed_ms)
    }

    /// Sample outside the ticker (e.g. right before a lap), using the
    /// current generation.
    pub fn sample_now(&mut self, now_ms: u64) -> Result<u64, Rejected> {
        self.sample(now_ms, self.generation)
    }

    pub fn current_elapsed(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    fn compute(&self, now_ms: u64) -> u64 {
        let segment = now_ms.saturating_sub(self.origin_ms);
        // never let a sample go backwards
        (self.accumulated_ms + segment).max(self.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_zero() {
        let engine = TimerEngine::new();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert!(!engine.is_running());
        assert_eq!(engine.current_elapsed(), 0);
    }

    #[test]
    fn start_then_pause_at_same_instant_is_zero() {
        let mut engine = TimerEngine::new();
        engine.start(5_000).unwrap();
        engine.pause(5_000).unwrap();
        assert_eq!(engine.current_elapsed(), 0);
    }

    #[test]
    fn pause_and_resume_preserve_accumulated_time() {
        let mut engine = TimerEngine::new();

        engine.start(1_000).unwrap();
        engine.pause(1_500).unwrap();
        assert_eq!(engine.current_elapsed(), 500);

        // paused time does not count
        engine.start(10_000).unwrap();
        engine.pause(10_300).unwrap();
        assert_eq!(engine.current_elapsed(), 800);
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let mut engine = TimerEngine::new();
        let generation = engine.start(0).unwrap();
        engine.sample(250, generation).unwrap();
        engine.pause(400).unwrap();

        assert_eq!(engine.sample(9_000, generation), Err(Rejected::NotRunning));
        assert_eq!(engine.current_elapsed(), 400);
    }

    #[test]
    fn sampling_uses_clock_delta_not_tick_count() {
        let mut engine = TimerEngine::new();
        let generation = engine.start(100).unwrap();

        // irregular tick spacing
        assert_eq!(engine.sample(110, generation), Ok(10));
        assert_eq!(engine.sample(187, generation), Ok(87));
        assert_eq!(engine.sample(1_100, generation), Ok(1_000));
    }

    #[test]
    fn sample_never_goes_backwards() {
        let mut engine = TimerEngine::new();
        let generation = engine.start(1_000).unwrap();
        engine.sample(1_500, generation).unwrap();

        assert_eq!(engine.sample(1_200, generation), Ok(500));
    }

    #[test]
    fn double_start_and_double_pause_are_no_ops() {
        let mut engine = TimerEngine::new();
        let generation = engine.start(0).unwrap();

        assert_eq!(engine.start(50), Err(Rejected::AlreadyRunning));
        // the original run keeps its generation and origin
        assert_eq!(engine.sample(80, generation), Ok(80));

        engine.pause(100).unwrap();
        assert_eq!(engine.pause(200), Err(Rejected::NotRunning));
        assert_eq!(engine.current_elapsed(), 100);
    }

    #[test]
    fn ticks_from_an_old_generation_are_rejected() {
        let mut engine = TimerEngine::new();
        let old = engine.start(0).unwrap();
        engine.pause(100).unwrap();
        let new = engine.start(200).unwrap();

        assert_ne!(old, new);
        assert_eq!(engine.sample(250, old), Err(Rejected::StaleTick));
        assert_eq!(engine.current_elapsed(), 100);
        assert_eq!(engine.sample(250, new), Ok(150));
    }

    #[test]
    fn reset_zeroes_and_stops_in_any_state() {
        let mut engine = TimerEngine::new();
        let generation = engine.start(0).unwrap();
        engine.sample(700, generation).unwrap();

        engine.reset();
        assert!(!engine.is_running());
        assert_eq!(engine.current_elapsed(), 0);
        assert_eq!(engine.sample(800, generation), Err(Rejected::NotRunning));

        // fresh run counts from zero again
        engine.start(1_000).unwrap();
        engine.pause(1_250).unwrap();
        assert_eq!(engine.current_elapsed(), 250);
    }
}
