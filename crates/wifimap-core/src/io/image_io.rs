use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::Result;
use crate::floorplan::FloorPlan;

/// Load a floor plan, decoding any supported format to RGB.
pub fn load_floor_plan(path: &Path) -> Result<FloorPlan> {
    let img = image::open(path)?.to_rgb8();
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded floor plan"
    );
    Ok(FloorPlan::new(img)?.with_source(path.to_path_buf()))
}

/// Save an RGB image, choosing the format from the extension (PNG when
/// unknown).
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        Some("tiff" | "tif") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    };
    image.save_with_format(path, format)?;
    info!(path = %path.display(), "Saved image");
    Ok(())
}
