use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::info;
use wifimap_core::scan::{ProcessScanner, ScanSource, ScannerConfig};

use crate::messages::{WorkerCommand, WorkerResult};

/// How often a running scan is checked for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the scan worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: ScannerConfig,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("wifimap-scanner".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, ProcessScanner::new(config));
        })
        .expect("Failed to spawn scanner thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    mut scanner: ProcessScanner,
) {
    let mut started: Option<Instant> = None;

    loop {
        // Block while idle; wake periodically while a scan runs.
        let cmd = if scanner.is_running() {
            match cmd_rx.recv_timeout(POLL_INTERVAL) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match cmd_rx.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        };

        match cmd {
            Some(WorkerCommand::Scan) => {
                if !scanner.is_running() {
                    started = Some(Instant::now());
                    scanner.start();
                }
            }
            Some(WorkerCommand::Cancel) => {
                scanner.cancel();
                started = None;
            }
            None => {}
        }

        if let Some(records) = scanner.poll() {
            let elapsed = started.take().map(|t| t.elapsed()).unwrap_or_default();
            send(&tx, &ctx, WorkerResult::ScanFinished { records, elapsed });
        }
    }

    info!("Scanner thread exiting");
}
