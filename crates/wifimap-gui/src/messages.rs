use std::path::PathBuf;
use std::time::Duration;

use wifimap_core::floorplan::FloorPlan;
use wifimap_core::observation::ScanRecord;

/// Commands sent from UI thread to the scan worker.
pub enum WorkerCommand {
    /// Start one scan. Ignored while a scan is running.
    Scan,
    /// Abort the running scan without reporting it.
    Cancel,
}

/// Where a chosen save path should be written from.
#[derive(Clone, Copy, Debug)]
pub enum SaveTarget {
    Csv,
    Screenshot,
}

/// Results sent back to the UI thread, from the worker or dialog threads.
pub enum WorkerResult {
    ScanFinished {
        records: Vec<ScanRecord>,
        elapsed: Duration,
    },
    FloorPlanLoaded {
        plan: FloorPlan,
    },
    SavePathChosen {
        target: SaveTarget,
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
