pub mod process;
pub mod timer;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::consts::{
    DEFAULT_SCANNER_OUTPUT, DEFAULT_SCANNER_PROGRAM, DEFAULT_SCAN_INTERVAL_MS,
    DEFAULT_SCAN_KILL_TIMEOUT_MS, SCANNER_OUTPUT_PLACEHOLDER,
};
use crate::observation::ScanRecord;

pub use process::ProcessScanner;
pub use timer::ScanTimer;

/// External scanner invocation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments; `{output}` is replaced by `output_path`.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_kill_timeout_ms")]
    pub kill_timeout_ms: u64,
}

fn default_program() -> String {
    DEFAULT_SCANNER_PROGRAM.to_string()
}
fn default_args() -> Vec<String> {
    vec!["--json".to_string(), SCANNER_OUTPUT_PLACEHOLDER.to_string()]
}
fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCANNER_OUTPUT)
}
fn default_interval_ms() -> u64 {
    DEFAULT_SCAN_INTERVAL_MS
}
fn default_kill_timeout_ms() -> u64 {
    DEFAULT_SCAN_KILL_TIMEOUT_MS
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            output_path: default_output_path(),
            interval_ms: DEFAULT_SCAN_INTERVAL_MS,
            kill_timeout_ms: DEFAULT_SCAN_KILL_TIMEOUT_MS,
        }
    }
}

impl ScannerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn kill_timeout(&self) -> Duration {
        Duration::from_millis(self.kill_timeout_ms)
    }

    /// Arguments with the output placeholder substituted.
    pub fn resolved_args(&self) -> Vec<String> {
        let output = self.output_path.to_string_lossy();
        self.args
            .iter()
            .map(|a| a.replace(SCANNER_OUTPUT_PLACEHOLDER, &output))
            .collect()
    }
}

/// Something that produces scan batches asynchronously.
///
/// `poll` returns `Some(batch)` exactly once per started scan. Failures are
/// reported as an empty batch, never as an error.
pub trait ScanSource {
    /// Begin a scan. Has no effect while one is already running.
    fn start(&mut self);

    /// Collect the finished batch, or `None` while still running or idle.
    fn poll(&mut self) -> Option<Vec<ScanRecord>>;

    /// Abort the running scan, if any. No batch is reported for it.
    fn cancel(&mut self);

    fn is_running(&self) -> bool;
}

/// Parse a scanner report `{"scan_data": [...]}`.
///
/// Invalid JSON, a missing `scan_data` key or a non-array value all give an
/// empty batch. Entries that are not objects are skipped.
pub fn parse_scan_document(text: &str) -> Vec<ScanRecord> {
    let doc: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Scanner output is not valid JSON");
            return Vec::new();
        }
    };
    let Some(entries) = doc.get("scan_data").and_then(Value::as_array) else {
        debug!("Scanner output has no scan_data array");
        return Vec::new();
    };
    let records: Vec<ScanRecord> = entries.iter().filter_map(ScanRecord::from_value).collect();
    debug!(entries = entries.len(), records = records.len(), "Parsed scan report");
    records
}
