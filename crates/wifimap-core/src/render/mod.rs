pub mod colormap;
pub mod composite;
pub mod legend;
pub mod overlay;
pub mod registry;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OVERLAY_OPACITY, DEFAULT_RSSI_MAX, DEFAULT_RSSI_MIN};

pub use colormap::Colormap;
pub use composite::compose;
pub use legend::Legend;
pub use overlay::{render_overlay, Overlay};
pub use registry::OverlayRegistry;

/// Fixed value range mapped onto the colormap. Shared by every overlay so
/// colors compare across networks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` in the range, clipped to [0.0, 1.0].
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// How overlays are colored and blended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_rssi_min")]
    pub rssi_min: f64,
    #[serde(default = "default_rssi_max")]
    pub rssi_max: f64,
    /// Overlay opacity in [0.0, 1.0].
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub colormap: Colormap,
}

fn default_rssi_min() -> f64 {
    DEFAULT_RSSI_MIN
}
fn default_rssi_max() -> f64 {
    DEFAULT_RSSI_MAX
}
fn default_opacity() -> f32 {
    DEFAULT_OVERLAY_OPACITY
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rssi_min: DEFAULT_RSSI_MIN,
            rssi_max: DEFAULT_RSSI_MAX,
            opacity: DEFAULT_OVERLAY_OPACITY,
            colormap: Colormap::default(),
        }
    }
}

impl DisplayConfig {
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.rssi_min, self.rssi_max)
    }
}
