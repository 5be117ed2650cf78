mod common;

use approx::assert_relative_eq;

use common::observation;
use wifimap_core::calibration::ScaleFactor;
use wifimap_core::error::WifiMapError;
use wifimap_core::heatmap::{gaussian_smooth, interpolate, HeatmapParams};
use wifimap_core::observation::Observation;

fn small_params() -> HeatmapParams {
    HeatmapParams {
        grid_resolution: 40,
        ..HeatmapParams::default()
    }
}

fn scale() -> ScaleFactor {
    ScaleFactor::new(100.0, 5.0).unwrap()
}

#[test]
fn test_two_samples_is_insufficient() {
    let obs = vec![observation(10.0, 10.0, "a", -40), observation(90.0, 90.0, "a", -70)];
    let err = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap_err();
    assert!(matches!(
        err,
        WifiMapError::InsufficientData { found: 2, required: 3 }
    ));
}

#[test]
fn test_zero_samples_is_insufficient() {
    let obs: Vec<Observation> = Vec::new();
    assert!(matches!(
        interpolate(&obs, scale(), 100, 100, &small_params()),
        Err(WifiMapError::InsufficientData { found: 0, .. })
    ));
}

#[test]
fn test_collinear_samples_succeed() {
    let obs = vec![
        observation(10.0, 50.0, "a", -40),
        observation(50.0, 50.0, "a", -60),
        observation(90.0, 50.0, "a", -80),
    ];
    let raster = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    assert!(raster.values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_coincident_samples_succeed() {
    let obs = vec![
        observation(20.0, 20.0, "a", -40),
        observation(20.0, 20.0, "a", -60),
        observation(20.0, 20.0, "a", -80),
    ];
    let raster = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    // All cells take the first sample's value.
    for &v in raster.values.iter() {
        assert_relative_eq!(v, -40.0, epsilon = 1e-9);
    }
}

#[test]
fn test_raster_shape_and_extent() {
    let obs = vec![
        observation(0.0, 0.0, "a", -40),
        observation(500.0, 400.0, "a", -60),
        observation(999.0, 799.0, "a", -80),
    ];
    let params = HeatmapParams::default();
    let raster = interpolate(&obs, scale(), 1000, 800, &params).unwrap();
    assert_eq!(raster.rows(), 200);
    assert_eq!(raster.cols(), 200);
    assert_eq!(raster.sample_count, 3);
    assert_eq!((raster.image_width, raster.image_height), (1000, 800));
    assert_relative_eq!(*raster.grid.xs.last().unwrap(), 50.0);
    assert_relative_eq!(*raster.grid.ys.last().unwrap(), 40.0);
    assert_eq!(raster.grid.xs[0], 0.0);
}

#[test]
fn test_constant_field_stays_constant() {
    let obs = vec![
        observation(5.0, 5.0, "a", -55),
        observation(60.0, 10.0, "a", -55),
        observation(30.0, 80.0, "a", -55),
        observation(90.0, 90.0, "a", -55),
    ];
    let raster = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    for &v in raster.values.iter() {
        assert_relative_eq!(v, -55.0, epsilon = 1e-9);
    }
}

#[test]
fn test_values_stay_within_sample_range() {
    let obs = vec![
        observation(5.0, 5.0, "a", -40),
        observation(95.0, 5.0, "a", -70),
        observation(50.0, 95.0, "a", -85),
    ];
    let raster = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    let (lo, hi) = raster.value_bounds();
    assert!(lo >= -85.0 - 1e-9);
    assert!(hi <= -40.0 + 1e-9);
}

#[test]
fn test_interpolation_is_deterministic() {
    let obs = vec![
        observation(12.0, 7.0, "a", -42),
        observation(70.0, 33.0, "a", -67),
        observation(25.0, 88.0, "a", -73),
        observation(91.0, 64.0, "a", -58),
    ];
    let a = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    let b = interpolate(&obs, scale(), 100, 100, &small_params()).unwrap();
    assert_eq!(a.values, b.values);
}

#[test]
fn test_nearest_sample_dominates_its_corner() {
    let params = HeatmapParams {
        grid_resolution: 40,
        smoothing_sigma: 0.0,
        ..HeatmapParams::default()
    };
    let obs = vec![
        observation(0.0, 0.0, "a", -40),
        observation(99.0, 0.0, "a", -60),
        observation(0.0, 99.0, "a", -80),
    ];
    let raster = interpolate(&obs, scale(), 100, 100, &params).unwrap();
    assert_eq!(raster.values[[0, 0]], -40.0);
    assert_eq!(raster.values[[0, 39]], -60.0);
    assert_eq!(raster.values[[39, 0]], -80.0);
}

#[test]
fn test_extreme_scales_keep_nearest_lookup() {
    let params = HeatmapParams {
        grid_resolution: 40,
        smoothing_sigma: 0.0,
        ..HeatmapParams::default()
    };
    let obs = vec![
        observation(0.0, 0.0, "a", -40),
        observation(99.0, 0.0, "a", -60),
        observation(0.0, 99.0, "a", -80),
    ];
    for mpp in [1e300, 1e-300] {
        let scale = ScaleFactor::from_meters_per_pixel(mpp).unwrap();
        let raster = interpolate(&obs, scale, 100, 100, &params).unwrap();
        assert_eq!(raster.values[[0, 0]], -40.0, "scale {mpp}");
        assert_eq!(raster.values[[0, 39]], -60.0, "scale {mpp}");
        assert_eq!(raster.values[[39, 0]], -80.0, "scale {mpp}");
        assert_eq!(raster.value_bounds(), (-80.0, -40.0));
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    let obs = vec![
        observation(1.0, 1.0, "a", -40),
        observation(2.0, 2.0, "a", -50),
        observation(3.0, 3.0, "a", -60),
    ];
    assert!(matches!(
        interpolate(&obs, scale(), 0, 100, &small_params()),
        Err(WifiMapError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_smoothing_reduces_peak() {
    let mut data = ndarray::Array2::<f64>::zeros((30, 30));
    data[[15, 15]] = 100.0;
    let smoothed = gaussian_smooth(&data, 3.0, 4.0);
    assert!(smoothed[[15, 15]] < 100.0);
    assert!(smoothed[[15, 16]] > 0.0);
    // Mass is preserved away from the edges.
    assert_relative_eq!(smoothed.sum(), 100.0, epsilon = 1e-6);
}

#[test]
fn test_smoothing_disabled_with_zero_sigma() {
    let data = ndarray::Array2::from_shape_fn((5, 5), |(r, c)| (r * 5 + c) as f64);
    assert_eq!(gaussian_smooth(&data, 0.0, 4.0), data);
}
