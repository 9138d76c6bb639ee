// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc;

use crate::{
    core::{action::Action, manager_msg::ManagerMsg},
    services::ticker::Ticker,
};

use super::Daemon;

impl Daemon {
    pub(super) fn exec_action(&mut self, action: Action, tx: &mpsc::Sender<ManagerMsg>) {
        match action {
            Action::StartTicker { generation } => {
                // never two tickers at once
                self.stop_ticker();
                self.ticker = Some(Ticker::spawn(
                    tx.clone(),
                    self.config.tick_interval(),
                    generation,
                ));
            }

            Action::StopTicker => self.stop_ticker(),

            Action::Render => self.render(),
        }
    }

    /// Synchronous: the task is aborted before this returns.
    pub(super) fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    pub(super) fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(|t| t.generation())
    }
}
