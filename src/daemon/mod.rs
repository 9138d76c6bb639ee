// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod run;


use crate::{
    config::model::LapwatchConfig,
    core::{
        action::Action,
        error::Rejected,
        events::Event,
        stopwatch::Stopwatch,
    },
    services::{presenter::Presenter, ticker::Ticker},
    sdebug,
};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Owns all stopwatch state. Every transition happens on the task running
/// `Daemon::run`; services only talk to it through `ManagerMsg`.
pub struct Daemon {
    stopwatch: Stopwatch,
    config: LapwatchConfig,
    presenter: Box<dyn Presenter>,

    // Live sampling task, if the stopwatch is running.
    ticker: Option<Ticker>,

    started_ms: u64,
}

impl Daemon {
    pub fn new(config: LapwatchConfig, presenter: Box<dyn Presenter>) -> Self {
        sdebug!(
            "Daemon",
            "tick_ms={}, lap_order={:?}",
            config.tick_ms,
            config.lap_order,
        );

        Self {
            stopwatch: Stopwatch::new(),
            config,
            presenter,
            ticker: None,
            started_ms: crate::core::utils::now_ms(),
        }
    }

    /// Feed one event through the stopwatch. A rejected event is a no-op;
    /// the reason is logged and handed back for IPC replies.
    fn handle_one_event(&mut self, event: Event) -> (Vec<Action>, Option<Rejected>) {
        let is_tick = matches!(event, Event::Tick { .. });

        match self.stopwatch.handle_event(event.clone()) {
            Ok(actions) => {
                if !is_tick {
                    sdebug!("Event", "{:?} -> {:?}", event, actions);
                }
                (actions, None)
            }
            Err(reason) => {
                sdebug!("Event", "ignored {:?}: {}", event, reason);
                (Vec::new(), Some(reason))
            }
        }
    }

    fn render(&mut self) {
        let snapshot = self.stopwatch.snapshot(self.config.lap_order);
        self.presenter.render(&snapshot);
    }
}
