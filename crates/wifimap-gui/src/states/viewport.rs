/// Viewport display state.
pub struct ViewportState {
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Fit the image to the panel on the next frame (new floor plan).
    pub fit_pending: bool,
    /// Calibration marker being dragged, by index.
    pub dragging_marker: Option<usize>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            fit_pending: false,
            dragging_marker: None,
        }
    }
}
