use tracing::{info, warn};

use crate::calibration::Calibrator;
use crate::consts::OUT_OF_BOUNDS_STATUS;
use crate::floorplan::FloorPlan;
use crate::observation::PixelPoint;

use super::{Mode, Session, SessionEffect};

impl Session {
    pub(super) fn load_image(&mut self, plan: FloorPlan) -> Vec<SessionEffect> {
        let mut effects = Vec::new();
        if self.mode == Mode::Capturing {
            effects.extend(self.halt_capture());
        }
        info!(width = plan.width(), height = plan.height(), "Floor plan loaded");
        self.reset_capture_data();
        self.scale = None;
        self.plan = Some(plan);
        self.calibrator = Some(Calibrator::new());
        self.mode = Mode::Calibrating;
        effects
    }

    pub(super) fn begin_calibration(&mut self) {
        if self.plan.is_none() || matches!(self.mode, Mode::Capturing | Mode::Calibrating) {
            return;
        }
        self.calibrator = Some(Calibrator::new());
        self.mode = Mode::Calibrating;
    }

    pub(super) fn click(&mut self, point: PixelPoint) {
        let Some(plan) = self.plan.as_ref() else {
            return;
        };
        if !matches!(self.mode, Mode::Calibrating | Mode::Capturing) {
            return;
        }
        if plan.check_bounds(point).is_err() {
            self.set_status(OUT_OF_BOUNDS_STATUS);
            return;
        }
        match self.mode {
            Mode::Calibrating => {
                if let Some(cal) = self.calibrator.as_mut() {
                    cal.place_marker(point);
                }
            }
            Mode::Capturing => self.set_scan_location(point),
            _ => {}
        }
    }

    pub(super) fn confirm_calibration(&mut self) {
        let Some(cal) = self.calibrator.as_mut() else {
            return;
        };
        match cal.confirm() {
            Ok(scale) => {
                self.scale = Some(scale);
                self.calibrator = None;
                self.mode = self.settled_mode();
                self.set_status(format!(
                    "Scale set to {:.4} m/px",
                    scale.meters_per_pixel()
                ));
            }
            Err(e) => {
                warn!(error = %e, "Calibration rejected");
                self.set_status("Place two markers and enter positive lengths to calibrate.");
            }
        }
    }

    pub(super) fn cancel_calibration(&mut self) {
        let Some(mut cal) = self.calibrator.take() else {
            return;
        };
        cal.cancel();
        self.scale = None;
        self.mode = self.settled_mode();
        info!("Calibration cancelled");
    }
}
