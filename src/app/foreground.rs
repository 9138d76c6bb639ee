// Author: Dustin Pilgrim
// License: MIT

use std::io;

use tokio::sync::{mpsc, watch};

use crate::app::platform::RawTerminal;
use crate::cli::Args;
use crate::config::model::clamp_tick_ms;
use crate::core::manager_msg::ManagerMsg;
use crate::daemon::Daemon;
use crate::services::presenter::{NullPresenter, Presenter, TerminalPresenter};
use crate::{log, serror, sinfo, swarn};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // single-instance
    let _instance_lock = crate::app::platform::acquire_single_instance_lock().map_err(|e| {
        eprintln!("lapwatch: {e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    let interactive = !args.headless;

    // Anything printed while the terminal is raw lands in the middle of the frame.
    log::set_console_output(!(interactive || args.no_console));

    // file logging
    if let Some(path) = log::default_log_path() {
        if let Err(e) = log::enable_file_output(&path, log::LogPolicy::default()) {
            if !interactive {
                eprintln!("lapwatch: failed to enable file logging: {e}");
            }
        }
    }

    let mut config = crate::config::load(args.config.as_deref()).map_err(|e| {
        serror!("Config", "{:#}", e);
        eprintln!("lapwatch: {e:#}");
        e
    })?;

    if let Some(ms) = args.tick_ms {
        config.tick_ms = clamp_tick_ms(ms);
    }
    log::set_verbose(args.verbose || config.verbose);

    sinfo!("Lapwatch", "lapwatch starting (interactive={}, tick_ms={})", interactive, config.tick_ms);

    let (tx, rx) = mpsc::channel::<ManagerMsg>(256);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let _ipc = match crate::ipc::server::spawn_ipc_server(tx.clone(), &crate::ipc::socket_path()) {
        Ok(server) => Some(server),
        Err(e) => {
            swarn!("Ipc", "failed to start: {}", e);
            None
        }
    };

    // Restored only after the daemon has written its teardown frame.
    let raw_terminal = if interactive {
        Some(RawTerminal::enable()?)
    } else {
        None
    };

    let keyboard = interactive.then(|| crate::services::keyboard::spawn_keyboard_reader(tx.clone()));

    let presenter: Box<dyn Presenter> = if interactive {
        Box::new(TerminalPresenter::stdout())
    } else {
        Box::new(NullPresenter)
    };

    let mut daemon = Daemon::new(config, presenter);

    let mut daemon_task = tokio::spawn({
        let tx = tx.clone();
        async move { daemon.run(tx, rx, shutdown_rx).await }
    });

    let result = tokio::select! {
        res = &mut daemon_task => res,

        _ = tokio::signal::ctrl_c() => {
            sinfo!("Lapwatch", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);
            daemon_task.await
        }
    };

    drop(keyboard);
    drop(raw_terminal);

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(join_err) => Err(Box::new(join_err) as AnyError),
    }
}
