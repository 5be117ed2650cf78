use tracing::{debug, info};

use crate::error::{Result, WifiMapError};
use crate::observation::PixelPoint;

/// Number of reference markers a calibration needs.
pub const CALIBRATION_MARKER_COUNT: usize = 2;

/// Meters-per-pixel conversion derived from calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Build a scale from a measured pixel distance and its real length.
    /// Both, and their ratio, must be positive and finite.
    pub fn new(pixel_distance: f64, real_distance: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(pixel_distance) || !valid(real_distance) {
            return Err(WifiMapError::InvalidCalibration {
                pixel_distance,
                real_distance,
            });
        }
        let scale = compute_scale(pixel_distance, real_distance);
        if !valid(scale) {
            return Err(WifiMapError::InvalidCalibration {
                pixel_distance,
                real_distance,
            });
        }
        Ok(Self(scale))
    }

    /// Wrap an already-known meters-per-pixel value.
    pub fn from_meters_per_pixel(value: f64) -> Result<Self> {
        Self::new(1.0, value)
    }

    pub fn meters_per_pixel(&self) -> f64 {
        self.0
    }

    pub fn to_meters(&self, pixels: f64) -> f64 {
        pixels * self.0
    }
}

/// `real_distance / pixel_distance`, or 0.0 when the pixel distance is not
/// positive.
pub fn compute_scale(pixel_distance: f64, real_distance: f64) -> f64 {
    if pixel_distance <= 0.0 {
        return 0.0;
    }
    real_distance / pixel_distance
}

/// Pending calibration: up to two reference markers plus the two length
/// fields the user edits.
#[derive(Clone, Debug, Default)]
pub struct Calibrator {
    markers: Vec<PixelPoint>,
    /// Length between the markers in pixels. Tracks the markers but may be
    /// overridden by hand.
    pub pixel_length: f64,
    /// Real-world length between the markers in meters.
    pub real_length: f64,
}

impl Calibrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[PixelPoint] {
        &self.markers
    }

    /// Add a marker. Clicks beyond the second marker are ignored.
    pub fn place_marker(&mut self, point: PixelPoint) -> bool {
        if self.markers.len() >= CALIBRATION_MARKER_COUNT {
            return false;
        }
        self.markers.push(point);
        self.refresh_pixel_length();
        true
    }

    /// Drag an existing marker; the pixel length follows live.
    pub fn move_marker(&mut self, index: usize, point: PixelPoint) -> bool {
        let Some(marker) = self.markers.get_mut(index) else {
            return false;
        };
        *marker = point;
        self.refresh_pixel_length();
        true
    }

    /// Euclidean distance between the two markers, once both exist.
    pub fn marker_distance(&self) -> Option<f64> {
        match self.markers.as_slice() {
            [a, b] => Some(a.distance_to(*b)),
            _ => None,
        }
    }

    pub fn set_pixel_length(&mut self, pixels: f64) {
        self.pixel_length = pixels;
    }

    pub fn set_real_length(&mut self, meters: f64) {
        self.real_length = meters;
    }

    /// Scale implied by the current fields, 0.0 when undefined.
    pub fn preview_scale(&self) -> f64 {
        compute_scale(self.pixel_length, self.real_length)
    }

    /// Accept the calibration. Needs both markers and positive lengths;
    /// on success the markers are cleared.
    pub fn confirm(&mut self) -> Result<ScaleFactor> {
        if self.markers.len() != CALIBRATION_MARKER_COUNT {
            debug!(markers = self.markers.len(), "Calibration needs two markers");
            return Err(WifiMapError::InvalidCalibration {
                pixel_distance: 0.0,
                real_distance: self.real_length,
            });
        }
        let scale = ScaleFactor::new(self.pixel_length, self.real_length)?;
        self.markers.clear();
        info!(
            pixels = self.pixel_length,
            meters = self.real_length,
            meters_per_pixel = scale.meters_per_pixel(),
            "Calibration confirmed"
        );
        Ok(scale)
    }

    /// Abandon the calibration and drop the markers.
    pub fn cancel(&mut self) {
        self.markers.clear();
    }

    fn refresh_pixel_length(&mut self) {
        if let Some(d) = self.marker_distance() {
            self.pixel_length = d;
        }
    }
}
