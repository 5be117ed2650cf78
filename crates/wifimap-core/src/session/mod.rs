mod calibrate;
mod capture;
mod events;
mod overlays;

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::calibration::{Calibrator, ScaleFactor};
use crate::config::WifiMapConfig;
use crate::error::{Result, WifiMapError};
use crate::export::csv::save_csv;
use crate::floorplan::FloorPlan;
use crate::network::NetworkList;
use crate::observation::{PixelPoint, ScanRecord};
use crate::render::{compose, OverlayRegistry};
use crate::store::SampleStore;

pub use events::{Actions, Mode, SessionEffect, SessionEvent};

/// All mutable state of one survey: floor plan, scale, samples, networks
/// and overlays. Mutated only through `dispatch`, from a single thread.
pub struct Session {
    config: WifiMapConfig,
    mode: Mode,
    plan: Option<FloorPlan>,
    calibrator: Option<Calibrator>,
    scale: Option<ScaleFactor>,
    store: SampleStore,
    networks: NetworkList,
    overlays: OverlayRegistry,
    latest_scan: Vec<ScanRecord>,
    scan_location: Option<PixelPoint>,
    location_markers: Vec<PixelPoint>,
    scan_in_flight: bool,
    banner: Option<String>,
    status: Option<String>,
}

impl Session {
    pub fn new(config: WifiMapConfig) -> Self {
        let networks = NetworkList::new(config.networks.member_policy);
        Self {
            config,
            mode: Mode::Empty,
            plan: None,
            calibrator: None,
            scale: None,
            store: SampleStore::new(),
            networks,
            overlays: OverlayRegistry::new(),
            latest_scan: Vec::new(),
            scan_location: None,
            location_markers: Vec::new(),
            scan_in_flight: false,
            banner: None,
            status: None,
        }
    }

    /// Apply one event and return the effects the driver must perform.
    pub fn dispatch(&mut self, event: SessionEvent) -> Vec<SessionEffect> {
        debug!(event = event.name(), mode = ?self.mode, "Session event");
        match event {
            SessionEvent::LoadImage(plan) => self.load_image(plan),
            SessionEvent::BeginCalibration => {
                self.begin_calibration();
                Vec::new()
            }
            SessionEvent::Click(point) => {
                self.click(point);
                Vec::new()
            }
            SessionEvent::MoveCalibrationMarker { index, to } => {
                if let Some(cal) = self.calibrator.as_mut() {
                    cal.move_marker(index, to);
                }
                Vec::new()
            }
            SessionEvent::SetPixelLength(pixels) => {
                if let Some(cal) = self.calibrator.as_mut() {
                    cal.set_pixel_length(pixels);
                }
                Vec::new()
            }
            SessionEvent::SetRealLength(meters) => {
                if let Some(cal) = self.calibrator.as_mut() {
                    cal.set_real_length(meters);
                }
                Vec::new()
            }
            SessionEvent::ConfirmCalibration => {
                self.confirm_calibration();
                Vec::new()
            }
            SessionEvent::CancelCalibration => {
                self.cancel_calibration();
                Vec::new()
            }
            SessionEvent::StartCapture => self.start_capture(),
            SessionEvent::StopCapture => self.stop_capture(),
            SessionEvent::TimerTick => self.timer_tick(),
            SessionEvent::ScanFinished(records) => {
                self.scan_finished(records);
                Vec::new()
            }
            SessionEvent::ToggleNetwork { label, enabled } => {
                self.toggle_network(&label, enabled);
                Vec::new()
            }
        }
    }

    pub fn actions(&self) -> Actions {
        let has_plan = self.plan.is_some();
        let capturing = self.mode == Mode::Capturing;
        let calibrating = self.mode == Mode::Calibrating;
        let stopped = self.mode == Mode::Stopped;
        Actions {
            new_image: true,
            calibrate: has_plan && !capturing && !calibrating,
            capture: has_plan && self.scale.is_some() && !capturing && !calibrating,
            stop: capturing,
            export_csv: stopped && !self.store.is_empty(),
            export_screenshot: stopped,
        }
    }

    pub fn config(&self) -> &WifiMapConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn plan(&self) -> Option<&FloorPlan> {
        self.plan.as_ref()
    }

    pub fn calibrator(&self) -> Option<&Calibrator> {
        self.calibrator.as_ref()
    }

    pub fn scale(&self) -> Option<ScaleFactor> {
        self.scale
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn networks(&self) -> &NetworkList {
        &self.networks
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn latest_scan(&self) -> &[ScanRecord] {
        &self.latest_scan
    }

    pub fn scan_location(&self) -> Option<PixelPoint> {
        self.scan_location
    }

    /// Scan-location markers placed since the last clear.
    pub fn location_markers(&self) -> &[PixelPoint] {
        &self.location_markers
    }

    pub fn scan_in_flight(&self) -> bool {
        self.scan_in_flight
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Hand the transient status message to the UI, clearing it.
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }

    /// Floor plan with every live overlay blended on top.
    pub fn screenshot(&self, with_legend: bool) -> Result<RgbImage> {
        let plan = self.plan.as_ref().ok_or(WifiMapError::NoImage)?;
        let legend = if with_legend { self.overlays.legend() } else { None };
        Ok(compose(&plan.image, self.overlays.iter(), legend))
    }

    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        save_csv(path, self.store.iter())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Forget everything derived from captured data.
    fn reset_capture_data(&mut self) {
        self.store.clear();
        self.latest_scan.clear();
        self.networks.clear();
        self.overlays.clear();
        self.banner = None;
        self.scan_location = None;
        self.location_markers.clear();
    }

    /// Mode to return to once calibration closes.
    fn settled_mode(&self) -> Mode {
        if self.store.is_empty() {
            Mode::Idle
        } else {
            Mode::Stopped
        }
    }
}
