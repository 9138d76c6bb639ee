// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::{
    core::{
        events::Event,
        input::dispatch,
        manager_msg::{ControlReply, ManagerMsg},
        utils::{format_duration, now_ms},
    },
    sdebug, sinfo,
};

use super::{AnyError, Daemon};

impl Daemon {
    /// Event loop. Returns on shutdown or on a `StopDaemon` request. The
    /// ticker never outlives this call.
    pub async fn run(
        &mut self,
        tx: mpsc::Sender<ManagerMsg>,
        mut rx: mpsc::Receiver<ManagerMsg>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), AnyError> {
        sinfo!("Daemon", "daemon starting");

        // initial frame
        self.render();

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        sinfo!("Daemon", "daemon stopping (shutdown requested)");
                        break;
                    }
                }

                Some(msg) = rx.recv() => {
                    match msg {
                        ManagerMsg::Event(event) => {
                            let (actions, _) = self.handle_one_event(event);
                            for action in actions {
                                self.exec_action(action, &tx);
                            }
                        }

                        ManagerMsg::Key(key) => {
                            let Some(d) = dispatch(&key, self.stopwatch.engine().run_state()) else {
                                continue;
                            };

                            let event = Event::Command { command: d.command, now_ms: now_ms() };
                            let (actions, _) = self.handle_one_event(event);
                            for action in actions {
                                self.exec_action(action, &tx);
                            }
                        }

                        ManagerMsg::Control { command, reply } => {
                            let event = Event::Command { command, now_ms: now_ms() };
                            let (actions, ignored) = self.handle_one_event(event);
                            for action in actions {
                                self.exec_action(action, &tx);
                            }

                            let _ = reply.send(ControlReply {
                                snapshot: self.stopwatch.snapshot(self.config.lap_order),
                                ignored: ignored.map(|r| r.to_string()),
                            });
                        }

                        ManagerMsg::GetInfo { reply } => {
                            let _ = reply.send(self.stopwatch.snapshot(self.config.lap_order));
                        }

                        ManagerMsg::StopDaemon { reply } => {
                            sinfo!("Daemon", "daemon stopping (stop requested)");
                            let _ = reply.send(Ok("Stopping lapwatch".to_string()));
                            break;
                        }
                    }
                }
            }
        }

        self.teardown();
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(generation) = self.ticker_generation() {
            sdebug!("Daemon", "cancelling ticker (generation={})", generation);
        }
        self.stop_ticker();
        self.presenter.teardown();

        let uptime = Duration::from_millis(now_ms().saturating_sub(self.started_ms));
        sinfo!(
            "Daemon",
            "daemon stopped after {} ({} on the clock, {} laps)",
            format_duration(uptime),
            self.stopwatch.snapshot(self.config.lap_order).formatted,
            self.stopwatch.laps().len(),
        );
    }
}
