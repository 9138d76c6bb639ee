// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Event;
use crate::core::manager_msg::ManagerMsg;
use crate::core::utils::now_ms;
use crate::{sdebug, swarn};

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Handle to the periodic sampling task of one run segment.
///
/// Cancelling (or dropping) aborts the task before returning. A tick that was
/// already queued still carries the old generation and the engine rejects it.
pub struct Ticker {
    handle: JoinHandle<()>,
    generation: u64,
}

impl Ticker {
    pub fn spawn(tx: Sender<ManagerMsg>, period: Duration, generation: u64) -> Self {
        let handle = tokio::spawn(run_ticker(tx, period, generation));
        sdebug!("Ticker", "started (generation={}, period={:?})", generation, period);
        Self { handle, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        sdebug!("Ticker", "cancelled (generation={})", self.generation);
    }
}

async fn run_ticker(tx: Sender<ManagerMsg>, period: Duration, generation: u64) {
    let mut ticks = interval(period);
    // a stalled loop should not burst-fire to catch up; elapsed comes from the clock anyway
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // first tick of a tokio interval completes immediately
    ticks.tick().await;

    loop {
        ticks.tick().await;

        let event = Event::Tick {
            now_ms: now_ms(),
            generation,
        };

        // If the daemon is gone, stop.
        if tx.send(ManagerMsg::Event(event)).await.is_err() {
            swarn!("Ticker", "stopping (receiver dropped)");
            break;
        }
    }
}
