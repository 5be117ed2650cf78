use image::{Rgba, RgbaImage};

use super::{Colormap, ValueRange};

/// The single color-scale legend shared by all overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub range: ValueRange,
    pub colormap: Colormap,
}

impl Legend {
    pub fn new(range: ValueRange, colormap: Colormap) -> Self {
        Self { range, colormap }
    }

    /// Vertical gradient bar: range maximum at the top, minimum at the bottom.
    pub fn gradient(&self, width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        let denom = height.saturating_sub(1).max(1) as f64;
        for y in 0..height {
            let t = 1.0 - y as f64 / denom;
            let [r, g, b] = self.colormap.sample(t);
            for x in 0..width {
                img.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
        img
    }

    /// Tick values from the range minimum up to the maximum, `step` apart.
    pub fn ticks(&self, step: f64) -> Vec<f64> {
        if !(step > 0.0) || self.range.max < self.range.min {
            return vec![self.range.min, self.range.max];
        }
        let mut ticks = Vec::new();
        let mut v = self.range.min;
        while v <= self.range.max + step * 1e-9 {
            ticks.push(v);
            v += step;
        }
        ticks
    }

    /// Fraction from the top of the bar at which `value` sits.
    pub fn position_of(&self, value: f64) -> f64 {
        1.0 - self.range.normalize(value)
    }
}
