use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_CELL_THRESHOLD;

use super::grid::HeatmapGrid;

/// A scattered sample in the same units as the lookup grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Fill every grid cell with the value of its nearest sample.
///
/// Defined everywhere, including outside the samples' convex hull, and for
/// collinear or coincident samples. Ties go to the earliest sample.
/// Returns `None` when there are no samples.
pub fn nearest_neighbor(samples: &[SamplePoint], grid: &HeatmapGrid) -> Option<Array2<f64>> {
    if samples.is_empty() {
        return None;
    }
    let (rows, cols) = (grid.rows(), grid.cols());

    let fill_row = |row: usize| -> Vec<f64> {
        let y = grid.ys[row];
        grid.xs.iter().map(|&x| nearest_value(samples, x, y)).collect()
    };

    let data: Vec<f64> = if rows * cols >= PARALLEL_CELL_THRESHOLD {
        let row_data: Vec<Vec<f64>> = (0..rows).into_par_iter().map(fill_row).collect();
        row_data.into_iter().flatten().collect()
    } else {
        (0..rows).flat_map(fill_row).collect()
    };

    Some(Array2::from_shape_vec((rows, cols), data).expect("shape mismatch in nearest fill"))
}

fn nearest_value(samples: &[SamplePoint], x: f64, y: f64) -> f64 {
    let mut best = samples[0].value;
    let mut best_d2 = f64::INFINITY;
    for s in samples {
        let dx = s.x - x;
        let dy = s.y - y;
        let d2 = dx * dx + dy * dy;
        if d2 < best_d2 {
            best_d2 = d2;
            best = s.value;
        }
    }
    best
}
