use image::{Rgba, RgbaImage};

use crate::heatmap::HeatmapRaster;

use super::{Colormap, DisplayConfig, ValueRange};

/// A color-mapped heatmap layer for one network.
///
/// `image` has one pixel per grid cell and is stretched over the floor
/// plan's full pixel extent when displayed.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub label: String,
    pub image: RgbaImage,
    pub image_width: u32,
    pub image_height: u32,
    pub opacity: f32,
    /// Bumped by the registry each time the label is re-rendered.
    pub revision: u64,
    pub sample_count: usize,
}

/// Map a raster through the colormap. Values outside `range` clip to the
/// colormap ends.
pub fn render_overlay(raster: &HeatmapRaster, label: &str, display: &DisplayConfig) -> Overlay {
    let image = colorize(raster, display.range(), display.colormap, display.opacity);
    Overlay {
        label: label.to_string(),
        image,
        image_width: raster.image_width,
        image_height: raster.image_height,
        opacity: display.opacity,
        revision: 0,
        sample_count: raster.sample_count,
    }
}

fn colorize(raster: &HeatmapRaster, range: ValueRange, colormap: Colormap, opacity: f32) -> RgbaImage {
    let lut = colormap.lookup_table();
    let last = lut.len() - 1;
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (rows, cols) = (raster.rows(), raster.cols());

    let mut img = RgbaImage::new(cols as u32, rows as u32);
    for row in 0..rows {
        for col in 0..cols {
            let t = range.normalize(raster.values[[row, col]]);
            let idx = ((t * lut.len() as f64) as usize).min(last);
            let [r, g, b] = lut[idx];
            img.put_pixel(col as u32, row as u32, Rgba([r, g, b, alpha]));
        }
    }
    img
}
