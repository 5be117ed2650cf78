use image::{Rgb, RgbImage};
use ndarray::Array2;

use wifimap_core::consts::{LEGEND_BAR_WIDTH, LEGEND_MARGIN};
use wifimap_core::heatmap::{HeatmapGrid, HeatmapRaster};
use wifimap_core::render::{
    compose, render_overlay, Colormap, DisplayConfig, Legend, Overlay, OverlayRegistry,
    ValueRange,
};

fn raster_with(values: Array2<f64>) -> HeatmapRaster {
    let (rows, cols) = values.dim();
    HeatmapRaster {
        grid: HeatmapGrid {
            xs: vec![0.0; cols],
            ys: vec![0.0; rows],
        },
        values,
        image_width: 100,
        image_height: 50,
        sample_count: 3,
    }
}

fn legend() -> Legend {
    Legend::new(ValueRange::new(-90.0, -30.0), Colormap::Turbo)
}

#[test]
fn test_normalize_clips() {
    let range = ValueRange::new(-90.0, -30.0);
    assert_eq!(range.normalize(-120.0), 0.0);
    assert_eq!(range.normalize(-10.0), 1.0);
    assert_eq!(range.normalize(-60.0), 0.5);
}

#[test]
fn test_overlay_clips_out_of_range_values() {
    let values = Array2::from_shape_vec((1, 4), vec![-200.0, -90.0, -30.0, 20.0]).unwrap();
    let display = DisplayConfig::default();
    let overlay = render_overlay(&raster_with(values), "A 2.4 GHz", &display);
    let px = |x: u32| overlay.image.get_pixel(x, 0).0;
    assert_eq!(px(0), px(1));
    assert_eq!(px(2), px(3));
    assert_ne!(px(1), px(2));
}

#[test]
fn test_overlay_shape_and_alpha() {
    let values = Array2::from_elem((3, 5), -60.0);
    let display = DisplayConfig::default();
    let overlay = render_overlay(&raster_with(values), "A 2.4 GHz", &display);
    assert_eq!(overlay.image.dimensions(), (5, 3));
    assert_eq!((overlay.image_width, overlay.image_height), (100, 50));
    assert!(overlay.image.pixels().all(|p| p.0[3] == 128));
}

#[test]
fn test_colormap_ends() {
    let lut = Colormap::Grayscale.lookup_table();
    assert_eq!(lut.len(), 256);
    assert_eq!(lut[0], [0, 0, 0]);
    assert_eq!(lut[255], [255, 255, 255]);
    // Turbo runs from blue-ish to red-ish.
    let low = Colormap::Turbo.sample(0.15);
    let high = Colormap::Turbo.sample(0.95);
    assert!(low[2] > low[0]);
    assert!(high[0] > high[2]);
}

#[test]
fn test_registry_replaces_same_label() {
    let display = DisplayConfig::default();
    let mut registry = OverlayRegistry::new();
    let first = render_overlay(&raster_with(Array2::from_elem((2, 2), -50.0)), "A", &display);
    let second = render_overlay(&raster_with(Array2::from_elem((2, 2), -70.0)), "A", &display);

    assert!(registry.show(first, legend()).is_none());
    let replaced = registry.show(second, legend()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(replaced.revision, 1);
    assert_eq!(registry.get("A").unwrap().revision, 2);
}

#[test]
fn test_legend_survives_overlay_removal() {
    let display = DisplayConfig::default();
    let mut registry = OverlayRegistry::new();
    assert!(registry.legend().is_none());
    let overlay = render_overlay(&raster_with(Array2::from_elem((2, 2), -50.0)), "A", &display);
    registry.show(overlay, legend());
    assert!(registry.remove("A").is_some());
    assert!(registry.is_empty());
    assert!(registry.legend().is_some());
    assert!(registry.remove("A").is_none());

    registry.clear();
    assert!(registry.legend().is_none());
}

#[test]
fn test_legend_created_once() {
    let display = DisplayConfig::default();
    let mut registry = OverlayRegistry::new();
    let a = render_overlay(&raster_with(Array2::from_elem((2, 2), -50.0)), "A", &display);
    let b = render_overlay(&raster_with(Array2::from_elem((2, 2), -50.0)), "B", &display);
    registry.show(a, legend());
    registry.show(b, Legend::new(ValueRange::new(-100.0, 0.0), Colormap::Viridis));
    assert_eq!(registry.legend(), Some(&legend()));
    let labels: Vec<&str> = registry.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn test_legend_ticks_and_positions() {
    let legend = legend();
    assert_eq!(
        legend.ticks(10.0),
        vec![-90.0, -80.0, -70.0, -60.0, -50.0, -40.0, -30.0]
    );
    assert_eq!(legend.position_of(-30.0), 0.0);
    assert_eq!(legend.position_of(-90.0), 1.0);
    let bar = legend.gradient(4, 10);
    assert_eq!(bar.get_pixel(0, 0).0[..3], Colormap::Turbo.sample(1.0));
    assert_eq!(bar.get_pixel(0, 9).0[..3], Colormap::Turbo.sample(0.0));
}

#[test]
fn test_compose_without_overlays_is_identity() {
    let plan = RgbImage::from_pixel(20, 10, Rgb([10, 20, 30]));
    let out = compose(&plan, std::iter::empty::<&Overlay>(), None);
    assert_eq!(out, plan);
}

#[test]
fn test_compose_blends_and_appends_legend() {
    let plan = RgbImage::from_pixel(100, 50, Rgb([255, 255, 255]));
    let display = DisplayConfig {
        colormap: Colormap::Grayscale,
        ..DisplayConfig::default()
    };
    let overlay = render_overlay(&raster_with(Array2::from_elem((4, 4), -90.0)), "A", &display);
    let legend = legend();
    let out = compose(&plan, [&overlay], Some(&legend));

    assert_eq!(out.width(), 100 + LEGEND_BAR_WIDTH + 2 * LEGEND_MARGIN);
    assert_eq!(out.height(), 50);
    // Black at ~50% over white.
    let p = out.get_pixel(50, 25).0;
    assert!((125..=129).contains(&p[0]), "{p:?}");
    // Legend column is filled.
    assert_ne!(*out.get_pixel(100 + LEGEND_MARGIN, LEGEND_MARGIN), Rgb([255, 255, 255]));
}
