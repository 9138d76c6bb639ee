// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use crate::core::laps::LapOrder;

pub const DEFAULT_TICK_MS: u64 = 10;
pub const MIN_TICK_MS: u64 = 1;
pub const MAX_TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapwatchConfig {
    /// Sampling resolution of the ticker.
    pub tick_ms: u64,
    pub lap_order: LapOrder,
    pub verbose: bool,
}

impl Default for LapwatchConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            lap_order: LapOrder::NewestFirst,
            verbose: false,
        }
    }
}

impl LapwatchConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

pub fn clamp_tick_ms(ms: u64) -> u64 {
    ms.clamp(MIN_TICK_MS, MAX_TICK_MS)
}
