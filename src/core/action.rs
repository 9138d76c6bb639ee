// Author: Dustin Pilgrim
// License: MIT

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Spawn the periodic sampling task for this run segment.
    StartTicker {
        generation: u64,
    },

    /// Cancel the sampling task. Must complete before the next event is handled.
    StopTicker,

    /// State changed; hand a fresh snapshot to the presenter.
    Render,
}
