// Author: Dustin Pilgrim
// License: MIT

use crate::core::{engine::RunState, error::Rejected};

/// One recorded checkpoint. Never mutated after it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapEntry {
    /// 1-based, increments per entry, restarts after clear.
    pub sequence: u32,

    /// Time since the previous lap (or since start, for the first lap).
    pub split_ms: u64,

    /// Elapsed time when the lap was recorded.
    pub cumulative_ms: u64,
}

/// Display order for lap history. Storage is always chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LapOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl LapOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "newest-first" | "newest" | "desc" => Some(LapOrder::NewestFirst),
            "oldest-first" | "oldest" | "asc" => Some(LapOrder::OldestFirst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LapRecorder {
    entries: Vec<LapEntry>,
}

impl LapRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lap at `current_elapsed`.
    ///
    /// Only valid while running with time on the clock. Cumulative values
    /// stay strictly increasing, so a second lap inside the same sample is
    /// rejected rather than recorded as a zero split.
    pub fn record_lap(
        &mut self,
        run_state: RunState,
        current_elapsed: u64,
    ) -> Result<LapEntry, Rejected> {
        if run_state != RunState::Running {
            return Err(Rejected::NotRunning);
        }
        if current_elapsed == 0 {
            return Err(Rejected::ZeroElapsed);
        }

        let previous = self.entries.last().map(|e| e.cumulative_ms).unwrap_or(0);
        if current_elapsed <= previous {
            return Err(Rejected::NotAdvanced);
        }

        let entry = LapEntry {
            sequence: self.entries.len() as u32 + 1,
            split_ms: current_elapsed - previous,
            cumulative_ms: current_elapsed,
        };
        self.entries.push(entry);

        Ok(entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Chronological view.
    pub fn history(&self) -> &[LapEntry] {
        &self.entries
    }

    pub fn ordered(&self, order: LapOrder) -> Box<dyn Iterator<Item = &LapEntry> + '_> {
        match order {
            LapOrder::OldestFirst => Box::new(self.history().iter()),
            LapOrder::NewestFirst => Box::new(self.history().iter().rev()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shortest split. Needs at least two laps to mean anything.
    pub fn fastest(&self) -> Option<&LapEntry> {
        if self.len() < 2 {
            return None;
        }
        self.history().iter().min_by_key(|e| e.split_ms)
    }

    /// Longest split. Needs at least two laps to mean anything.
    pub fn slowest(&self) -> Option<&LapEntry> {
        if self.len() < 2 {
            return None;
        }
        self.history().iter().max_by_key(|e| e.split_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder_with(cumulative: &[u64]) -> LapRecorder {
        let mut laps = LapRecorder::new();
        for &c in cumulative {
            laps.record_lap(RunState::Running, c).unwrap();
        }
        laps
    }

    #[test]
    fn splits_and_sequence_numbers() {
        let laps = recorder_with(&[1_000, 2_500, 4_000]);

        let splits: Vec<u64> = laps.history().iter().map(|e| e.split_ms).collect();
        let seqs: Vec<u32> = laps.history().iter().map(|e| e.sequence).collect();

        assert_eq!(splits, vec![1_000, 1_500, 1_500]);
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn splits_sum_to_last_cumulative() {
        let laps = recorder_with(&[321, 1_000, 1_001, 7_777]);
        let total: u64 = laps.history().iter().map(|e| e.split_ms).sum();
        assert_eq!(total, 7_777);
        assert_eq!(laps.history().last().unwrap().cumulative_ms, 7_777);
    }

    #[test]
    fn lap_while_stopped_is_a_no_op() {
        let mut laps = recorder_with(&[1_000]);
        assert_eq!(
            laps.record_lap(RunState::Stopped, 2_000),
            Err(Rejected::NotRunning)
        );
        assert_eq!(laps.len(), 1);
    }

    #[test]
    fn lap_at_zero_elapsed_is_a_no_op() {
        let mut laps = LapRecorder::new();
        assert_eq!(
            laps.record_lap(RunState::Running, 0),
            Err(Rejected::ZeroElapsed)
        );
        assert!(laps.is_empty());
    }

    #[test]
    fn lap_without_progress_is_a_no_op() {
        let mut laps = recorder_with(&[1_000]);
        assert_eq!(
            laps.record_lap(RunState::Running, 1_000),
            Err(Rejected::NotAdvanced)
        );
        assert_eq!(laps.len(), 1);
    }

    #[test]
    fn clear_restarts_sequence_at_one() {
        let mut laps = recorder_with(&[100, 200]);
        laps.clear();
        assert!(laps.is_empty());

        let entry = laps.record_lap(RunState::Running, 300).unwrap();
        assert_eq!(entry.sequence, 1);
        assert_eq!(entry.split_ms, 300);
    }

    #[test]
    fn ordered_views() {
        let laps = recorder_with(&[100, 200, 300]);

        let newest: Vec<u32> = laps.ordered(LapOrder::NewestFirst).map(|e| e.sequence).collect();
        let oldest: Vec<u32> = laps.ordered(LapOrder::OldestFirst).map(|e| e.sequence).collect();

        assert_eq!(newest, vec![3, 2, 1]);
        assert_eq!(oldest, vec![1, 2, 3]);
    }

    #[test]
    fn fastest_and_slowest_need_two_laps() {
        let one = recorder_with(&[500]);
        assert!(one.fastest().is_none());
        assert!(one.slowest().is_none());

        let laps = recorder_with(&[1_000, 1_400, 3_000]);
        assert_eq!(laps.fastest().map(|e| e.sequence), Some(2));
        assert_eq!(laps.slowest().map(|e| e.sequence), Some(3));
    }

    #[test]
    fn lap_order_names() {
        assert_eq!(LapOrder::parse("newest-first"), Some(LapOrder::NewestFirst));
        assert_eq!(LapOrder::parse("Oldest_First"), Some(LapOrder::OldestFirst));
        assert_eq!(LapOrder::parse("asc"), Some(LapOrder::OldestFirst));
        assert_eq!(LapOrder::parse("sideways"), None);
    }
}
