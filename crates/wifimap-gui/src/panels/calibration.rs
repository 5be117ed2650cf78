use wifimap_core::calibration::{compute_scale, CALIBRATION_MARKER_COUNT};
use wifimap_core::session::{Mode, SessionEvent};

use crate::app::WifiMapApp;

/// Floating window for the pending calibration: both lengths plus the
/// scale they give.
pub fn show(ctx: &egui::Context, app: &mut WifiMapApp) {
    if app.session.mode() != Mode::Calibrating {
        return;
    }
    let Some(cal) = app.session.calibrator() else {
        return;
    };

    let placed = cal.markers().len();
    let mut pixels = cal.pixel_length;
    let mut meters = cal.real_length;
    let mut events = Vec::new();

    egui::Window::new("Calibrate Scale")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-340.0, 40.0])
        .show(ctx, |ui| {
            if placed < CALIBRATION_MARKER_COUNT {
                ui.label(format!(
                    "Click two points of known distance on the floor plan ({placed}/{CALIBRATION_MARKER_COUNT})."
                ));
            } else {
                ui.label("Drag the markers to adjust, then enter the real distance.");
            }
            ui.add_space(4.0);

            egui::Grid::new("calibration_fields")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Pixels");
                    if ui
                        .add(
                            egui::DragValue::new(&mut pixels)
                                .speed(1.0)
                                .range(0.0..=f64::MAX)
                                .suffix(" px"),
                        )
                        .changed()
                    {
                        events.push(SessionEvent::SetPixelLength(pixels));
                    }
                    ui.end_row();

                    ui.label("Meters");
                    if ui
                        .add(
                            egui::DragValue::new(&mut meters)
                                .speed(0.1)
                                .range(0.0..=f64::MAX)
                                .suffix(" m"),
                        )
                        .changed()
                    {
                        events.push(SessionEvent::SetRealLength(meters));
                    }
                    ui.end_row();

                    ui.label("Scale");
                    let scale = compute_scale(pixels, meters);
                    if scale > 0.0 {
                        ui.label(format!("{scale:.4} m/px"));
                    } else {
                        ui.label("-");
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let ready = placed == CALIBRATION_MARKER_COUNT && pixels > 0.0 && meters > 0.0;
                if ui.add_enabled(ready, egui::Button::new("OK")).clicked() {
                    events.push(SessionEvent::ConfirmCalibration);
                }
                if ui.button("Cancel").clicked() {
                    events.push(SessionEvent::CancelCalibration);
                }
            });
        });

    for event in events {
        app.dispatch(event);
    }
}
