use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{Result, WifiMapError};
use crate::observation::ScanRecord;

use super::{parse_scan_document, ScanSource, ScannerConfig};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs the external scanner program and reads its JSON report.
pub struct ProcessScanner {
    config: ScannerConfig,
    child: Option<Child>,
    /// Set when a scan could not be launched; reported as an empty batch.
    failed_launch: bool,
}

impl ProcessScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            child: None,
            failed_launch: false,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Run one scan to completion on the calling thread.
    pub fn scan_blocking(&mut self) -> Vec<ScanRecord> {
        self.start();
        loop {
            if let Some(batch) = self.poll() {
                return batch;
            }
            std::thread::sleep(WAIT_POLL_INTERVAL);
        }
    }

    fn spawn(&self) -> Result<Child> {
        let output = &self.config.output_path;
        if output.exists() {
            std::fs::remove_file(output)?;
        }
        let args = self.config.resolved_args();
        debug!(program = %self.config.program, ?args, "Launching scanner");
        Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| WifiMapError::ScannerFailure(format!("{}: {e}", self.config.program)))
    }

    fn collect(&self, status: ExitStatus) -> Vec<ScanRecord> {
        if !status.success() {
            warn!(%status, "Scanner exited with failure");
            return Vec::new();
        }
        match std::fs::read_to_string(&self.config.output_path) {
            Ok(text) => parse_scan_document(&text),
            Err(e) => {
                debug!(
                    path = %self.config.output_path.display(),
                    error = %e,
                    "Scanner produced no report"
                );
                Vec::new()
            }
        }
    }
}

impl ScanSource for ProcessScanner {
    fn start(&mut self) {
        if self.is_running() {
            return;
        }
        match self.spawn() {
            Ok(child) => self.child = Some(child),
            Err(e) => {
                warn!(error = %e, "Scan skipped");
                self.failed_launch = true;
            }
        }
    }

    fn poll(&mut self) -> Option<Vec<ScanRecord>> {
        if self.failed_launch {
            self.failed_launch = false;
            return Some(Vec::new());
        }
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(None) => None,
            Ok(Some(status)) => {
                self.child = None;
                let batch = self.collect(status);
                info!(records = batch.len(), "Scan finished");
                Some(batch)
            }
            Err(e) => {
                warn!(error = %e, "Lost track of scanner process");
                self.cancel();
                Some(Vec::new())
            }
        }
    }

    fn cancel(&mut self) {
        self.failed_launch = false;
        let Some(mut child) = self.child.take() else {
            return;
        };
        if let Err(e) = child.kill() {
            debug!(error = %e, "Scanner already exited");
        }
        let deadline = Instant::now() + self.config.kill_timeout();
        while Instant::now() < deadline {
            match child.try_wait() {
                Ok(Some(_)) | Err(_) => break,
                Ok(None) => std::thread::sleep(WAIT_POLL_INTERVAL),
            }
        }
        info!("Scan cancelled");
    }

    fn is_running(&self) -> bool {
        self.child.is_some() || self.failed_launch
    }
}

impl Drop for ProcessScanner {
    fn drop(&mut self) {
        self.cancel();
    }
}
