// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::path::{Path, PathBuf};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, timeout},
};

use crate::{core::manager_msg::ManagerMsg, sdebug, serror, sinfo};

use super::router::route_command;

const MAX_REQUEST_BYTES: usize = 256;

/// Control socket. Removes its socket file when dropped.
pub struct IpcServer {
    path: PathBuf,
    task: JoinHandle<()>,
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        self.task.abort();
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Binds the control socket and serves it until the returned handle drops.
pub fn spawn_ipc_server(tx: mpsc::Sender<ManagerMsg>, path: &Path) -> io::Result<IpcServer> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // A leftover socket from a crashed run; the instance lock already
    // guarantees nobody else is serving it.
    if path.exists() {
        let _ = std::fs::remove_file(path);
    }

    let listener = UnixListener::bind(path)?;
    sinfo!("Ipc", "listening on {}", path.display());

    let task = tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), async {
                            if let Err(e) = handle_connection(&mut stream, &tx).await {
                                serror!("Ipc", "Error handling IPC connection: {}", e);
                            }
                        })
                        .await;

                        if result.is_err() {
                            serror!("Ipc", "IPC connection timed out after 10 seconds");
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => serror!("Ipc", "Failed to accept IPC connection: {}", e),
            }
        }
    });

    Ok(IpcServer {
        path: path.to_path_buf(),
        task,
    })
}

/// Handles a single IPC connection: one request, one reply.
async fn handle_connection(
    stream: &mut UnixStream,
    tx: &mpsc::Sender<ManagerMsg>,
) -> io::Result<()> {
    let mut buf = vec![0u8; MAX_REQUEST_BYTES];
    let n = stream.read(&mut buf).await?;

    if n == 0 {
        return Ok(());
    }

    let cmd = String::from_utf8_lossy(&buf[..n]).trim().to_string();
    sdebug!("Ipc", "Received IPC command: {}", cmd);

    let response = route_command(&cmd, tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::info::Snapshot;
    use crate::core::laps::{LapOrder, LapRecorder};

    #[tokio::test]
    async fn serves_requests_over_the_socket() {
        let dir = std::env::temp_dir().join(format!("lapwatch-ipc-{}", std::process::id()));
        let path = dir.join("lapwatch.sock");

        let (tx, mut rx) = mpsc::channel(4);
        let server = spawn_ipc_server(tx, &path).unwrap();

        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if let ManagerMsg::GetInfo { reply } = msg {
                    let _ = reply.send(Snapshot::new(false, 1_234, &LapRecorder::new(), LapOrder::NewestFirst));
                }
            }
        });

        let out = crate::ipc::client::send_raw_to(&path, "info").await.unwrap();
        assert!(out.starts_with("00:01.23  [paused]"));

        drop(server);
        assert!(!path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
