use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::consts::{LEGEND_BAR_WIDTH, LEGEND_MARGIN};

use super::{Legend, Overlay};

/// Blend overlays over the floor plan, bottom to top, and optionally add
/// the legend bar on the right.
pub fn compose<'a, I>(plan: &RgbImage, overlays: I, legend: Option<&Legend>) -> RgbImage
where
    I: IntoIterator<Item = &'a Overlay>,
{
    let (w, h) = plan.dimensions();
    let mut canvas = plan.clone();

    for overlay in overlays {
        let stretched = imageops::resize(&overlay.image, w, h, FilterType::Triangle);
        for (x, y, px) in stretched.enumerate_pixels() {
            let a = px.0[3] as f32 / 255.0;
            if a <= 0.0 {
                continue;
            }
            let base = canvas.get_pixel_mut(x, y);
            for c in 0..3 {
                let blended = base.0[c] as f32 * (1.0 - a) + px.0[c] as f32 * a;
                base.0[c] = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    match legend {
        Some(legend) => append_legend(&canvas, legend),
        None => canvas,
    }
}

fn append_legend(canvas: &RgbImage, legend: &Legend) -> RgbImage {
    let (w, h) = canvas.dimensions();
    let extra = LEGEND_BAR_WIDTH + 2 * LEGEND_MARGIN;
    let mut out = RgbImage::from_pixel(w + extra, h, Rgb([255, 255, 255]));
    imageops::replace(&mut out, canvas, 0, 0);

    let bar_height = h.saturating_sub(2 * LEGEND_MARGIN).max(1);
    let bar = legend.gradient(LEGEND_BAR_WIDTH, bar_height);
    for (x, y, px) in bar.enumerate_pixels() {
        let (ox, oy) = (w + LEGEND_MARGIN + x, LEGEND_MARGIN + y);
        if oy < h {
            out.put_pixel(ox, oy, Rgb([px.0[0], px.0[1], px.0[2]]));
        }
    }
    out
}
