pub mod grid;
pub mod nearest;
pub mod smoothing;

use std::time::Instant;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calibration::ScaleFactor;
use crate::consts::{
    DEFAULT_GRID_RESOLUTION, DEFAULT_SMOOTHING_SIGMA, DEFAULT_SMOOTHING_TRUNCATE,
    MIN_INTERPOLATION_SAMPLES,
};
use crate::error::{Result, WifiMapError};
use crate::observation::Observation;

pub use grid::HeatmapGrid;
pub use nearest::{nearest_neighbor, SamplePoint};
pub use smoothing::gaussian_smooth;

/// Interpolation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapParams {
    /// Grid samples per axis.
    #[serde(default = "default_grid_resolution")]
    pub grid_resolution: usize,
    /// Gaussian sigma in grid cells; 0 disables smoothing.
    #[serde(default = "default_smoothing_sigma")]
    pub smoothing_sigma: f64,
    /// Kernel radius in multiples of sigma.
    #[serde(default = "default_truncate")]
    pub truncate: f64,
    /// Fewest observations accepted.
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
}

fn default_grid_resolution() -> usize {
    DEFAULT_GRID_RESOLUTION
}
fn default_smoothing_sigma() -> f64 {
    DEFAULT_SMOOTHING_SIGMA
}
fn default_truncate() -> f64 {
    DEFAULT_SMOOTHING_TRUNCATE
}
fn default_min_samples() -> usize {
    MIN_INTERPOLATION_SAMPLES
}

impl Default for HeatmapParams {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            smoothing_sigma: DEFAULT_SMOOTHING_SIGMA,
            truncate: DEFAULT_SMOOTHING_TRUNCATE,
            min_samples: MIN_INTERPOLATION_SAMPLES,
        }
    }
}

/// Estimated signal strength over the whole floor plan for one network.
///
/// Row 0 is the top edge of the image (y = 0), column 0 the left edge.
/// Values are not clamped; display clipping happens in the renderer.
#[derive(Clone, Debug)]
pub struct HeatmapRaster {
    pub values: Array2<f64>,
    pub grid: HeatmapGrid,
    /// Pixel extent of the floor plan this raster covers.
    pub image_width: u32,
    pub image_height: u32,
    /// Number of observations that went into the raster.
    pub sample_count: usize,
}

impl HeatmapRaster {
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// (min, max) of the raster values.
    pub fn value_bounds(&self) -> (f64, f64) {
        self.values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }
}

/// Build a heatmap raster from scattered observations.
///
/// Signal strength is spread onto a `grid_resolution` square grid by
/// nearest-neighbour lookup and then Gaussian-smoothed. The raster's grid
/// carries the physical extent in meters, derived from `scale`. Output is deterministic for a given input.
pub fn interpolate<'a, I>(
    observations: I,
    scale: ScaleFactor,
    width: u32,
    height: u32,
    params: &HeatmapParams,
) -> Result<HeatmapRaster>
where
    I: IntoIterator<Item = &'a Observation>,
{
    if width == 0 || height == 0 || params.grid_resolution == 0 {
        return Err(WifiMapError::InvalidDimensions { width, height });
    }

    // Nearest lookup runs in pixel space; only the output grid is in meters.
    let samples: Vec<SamplePoint> = observations
        .into_iter()
        .map(|o| SamplePoint {
            x: o.position.x,
            y: o.position.y,
            value: o.rssi as f64,
        })
        .collect();

    let required = params.min_samples.max(1);
    if samples.len() < required {
        debug!(found = samples.len(), required, "Too few samples for heatmap");
        return Err(WifiMapError::InsufficientData {
            found: samples.len(),
            required,
        });
    }

    let start = Instant::now();
    let grid = HeatmapGrid::new(
        scale.to_meters(width as f64),
        scale.to_meters(height as f64),
        params.grid_resolution,
    );
    let lookup = HeatmapGrid::new(width as f64, height as f64, params.grid_resolution);
    let raw = nearest_neighbor(&samples, &lookup).ok_or(WifiMapError::InsufficientData {
        found: 0,
        required,
    })?;
    let values = gaussian_smooth(&raw, params.smoothing_sigma, params.truncate);

    info!(
        samples = samples.len(),
        resolution = params.grid_resolution,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Heatmap interpolated"
    );

    Ok(HeatmapRaster {
        values,
        grid,
        image_width: width,
        image_height: height,
        sample_count: samples.len(),
    })
}
