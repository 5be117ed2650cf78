use std::fmt;

use crate::floorplan::FloorPlan;
use crate::observation::{PixelPoint, ScanRecord};

/// Inputs to the session: user interactions and scanner/timer callbacks.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// A new floor plan was opened. Resets the session and starts calibration.
    LoadImage(FloorPlan),
    /// Re-open calibration for the current floor plan.
    BeginCalibration,
    /// Primary click on the floor plan, in image pixels.
    Click(PixelPoint),
    /// A calibration marker was dragged.
    MoveCalibrationMarker { index: usize, to: PixelPoint },
    /// The pixel-length field was edited.
    SetPixelLength(f64),
    /// The meters field was edited.
    SetRealLength(f64),
    ConfirmCalibration,
    CancelCalibration,
    StartCapture,
    StopCapture,
    /// The periodic scan timer fired.
    TimerTick,
    /// The external scanner finished; failures arrive as an empty batch.
    ScanFinished(Vec<ScanRecord>),
    /// A network checkbox changed.
    ToggleNetwork { label: String, enabled: bool },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadImage(_) => "load_image",
            Self::BeginCalibration => "begin_calibration",
            Self::Click(_) => "click",
            Self::MoveCalibrationMarker { .. } => "move_calibration_marker",
            Self::SetPixelLength(_) => "set_pixel_length",
            Self::SetRealLength(_) => "set_real_length",
            Self::ConfirmCalibration => "confirm_calibration",
            Self::CancelCalibration => "cancel_calibration",
            Self::StartCapture => "start_capture",
            Self::StopCapture => "stop_capture",
            Self::TimerTick => "timer_tick",
            Self::ScanFinished(_) => "scan_finished",
            Self::ToggleNetwork { .. } => "toggle_network",
        }
    }
}

/// Side effects the driver must carry out after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    StartTimer,
    StopTimer,
    LaunchScan,
    CancelScan,
}

/// Where the session is in its workflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// No floor plan loaded.
    #[default]
    Empty,
    /// Calibration markers are being placed.
    Calibrating,
    /// Floor plan loaded, nothing captured yet.
    Idle,
    Capturing,
    /// A capture ran and was stopped; its data is still held.
    Stopped,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No floor plan"),
            Self::Calibrating => write!(f, "Calibrating"),
            Self::Idle => write!(f, "Ready"),
            Self::Capturing => write!(f, "Capturing"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Which user actions are currently available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Actions {
    pub new_image: bool,
    pub calibrate: bool,
    pub capture: bool,
    pub stop: bool,
    pub export_csv: bool,
    pub export_screenshot: bool,
}
