use image::{RgbImage, RgbaImage};

/// Convert a decoded floor plan to an egui ColorImage.
pub fn rgb_to_color_image(img: &RgbImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| egui::Color32::from_rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}

/// Convert an overlay or legend (straight alpha) to an egui ColorImage.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| egui::Color32::from_rgba_unmultiplied(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
