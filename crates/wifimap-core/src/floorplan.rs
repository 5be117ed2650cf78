use std::path::PathBuf;

use image::RgbImage;

use crate::error::{Result, WifiMapError};
use crate::observation::PixelPoint;

/// A decoded floor-plan image. Its pixel dimensions are the spatial extent
/// used for calibration and interpolation.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    pub image: RgbImage,
    pub source: Option<PathBuf>,
}

impl FloorPlan {
    pub fn new(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(WifiMapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image,
            source: None,
        })
    }

    /// Blank white plan, handy for headless runs with no image.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        Self::new(RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])))
    }

    pub fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width() as f64
            && point.y < self.height() as f64
    }

    /// Fails with `OutOfBounds` when `point` lies outside the image.
    pub fn check_bounds(&self, point: PixelPoint) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(WifiMapError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
