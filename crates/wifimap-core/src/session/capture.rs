use tracing::{debug, info};

use crate::config::CapturePolicy;
use crate::observation::{Observation, PixelPoint, ScanRecord};

use super::{Mode, Session, SessionEffect};

impl Session {
    pub(super) fn start_capture(&mut self) -> Vec<SessionEffect> {
        if !self.actions().capture {
            self.set_status("Load and calibrate a floor plan before capturing.");
            return Vec::new();
        }
        self.reset_capture_data();
        self.banner = Some(capture_banner(self.config.scanner.interval_ms));
        self.mode = Mode::Capturing;
        self.scan_in_flight = true;
        self.set_status("Scan started");
        info!("Capture started");
        vec![SessionEffect::StartTimer, SessionEffect::LaunchScan]
    }

    pub(super) fn stop_capture(&mut self) -> Vec<SessionEffect> {
        if self.mode != Mode::Capturing {
            return Vec::new();
        }
        let effects = self.halt_capture();
        self.banner = None;
        self.mode = Mode::Stopped;
        self.set_status("Scan stopped");
        info!(observations = self.store.len(), "Capture stopped");
        effects
    }

    /// Stop the timer and any running scan. Captured data is kept.
    pub(super) fn halt_capture(&mut self) -> Vec<SessionEffect> {
        self.scan_in_flight = false;
        self.location_markers.clear();
        vec![SessionEffect::StopTimer, SessionEffect::CancelScan]
    }

    pub(super) fn timer_tick(&mut self) -> Vec<SessionEffect> {
        if self.mode != Mode::Capturing || self.scan_in_flight {
            return Vec::new();
        }
        self.scan_in_flight = true;
        vec![SessionEffect::LaunchScan]
    }

    pub(super) fn scan_finished(&mut self, records: Vec<ScanRecord>) {
        self.scan_in_flight = false;
        if self.mode != Mode::Capturing {
            debug!("Discarding scan that finished outside a capture");
            return;
        }
        let added = self.networks.merge_batch(&records);
        if !added.is_empty() {
            debug!(count = added.len(), "Networks added");
        }
        self.latest_scan = records;

        if self.config.capture.policy == CapturePolicy::OnScan {
            if let Some(location) = self.scan_location {
                self.record_latest_scan(location);
            }
        }
    }

    pub(super) fn set_scan_location(&mut self, point: PixelPoint) {
        self.scan_location = Some(point);
        self.location_markers.push(point);
        if self.config.capture.policy == CapturePolicy::OnClick {
            self.record_latest_scan(point);
        }
    }

    /// Tag the latest batch with `location` and append it to the store.
    fn record_latest_scan(&mut self, location: PixelPoint) {
        let before = self.store.len();
        self.store.extend(
            self.latest_scan
                .iter()
                .filter_map(|r| Observation::from_record(r, location)),
        );
        let appended = self.store.len() - before;
        let dropped = self.latest_scan.len() - appended;
        debug!(
            x = location.x,
            y = location.y,
            appended,
            dropped,
            "Recorded scan at location"
        );
    }
}

fn capture_banner(interval_ms: u64) -> String {
    let secs = if interval_ms % 1000 == 0 {
        format!("{}", interval_ms / 1000)
    } else {
        format!("{:.1}", interval_ms as f64 / 1000.0)
    };
    format!(
        "Click on your current location to start collecting data.\nWi-Fi scan updates every {secs} seconds."
    )
}
