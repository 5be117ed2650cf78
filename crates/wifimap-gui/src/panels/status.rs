use std::time::Instant;

use crate::app::WifiMapApp;

const BANNER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 200, 80);

pub fn show(ctx: &egui::Context, app: &mut WifiMapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Banner: capture instructions or insufficient-data notices.
        if let Some(banner) = app.session.banner() {
            egui::Frame::NONE
                .fill(egui::Color32::from_black_alpha(120))
                .inner_margin(6.0)
                .corner_radius(2.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(banner).color(BANNER_COLOR).strong());
                });
        }

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.session.mode().to_string());
            ui.separator();
            if let Some(plan) = app.session.plan() {
                ui.label(format!("{}x{}", plan.width(), plan.height()));
                ui.separator();
            }
            match app.session.scale() {
                Some(scale) => ui.label(format!("{:.4} m/px", scale.meters_per_pixel())),
                None => ui.label("Not calibrated"),
            };
            ui.separator();
            ui.label(format!("Samples: {}", app.session.store().len()));
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));

            if app.session.scan_in_flight() {
                ui.separator();
                ui.spinner();
                ui.label("Scanning");
            } else if let Some(wait) = app.timer.time_until_next(Instant::now()) {
                ui.separator();
                ui.label(format!("Next scan in {:.0}s", wait.as_secs_f32().ceil()));
            }
            if let Some(last) = app.ui_state.last_scan {
                ui.separator();
                ui.label(format!(
                    "Scans: {} (last {:.1}s)",
                    app.ui_state.scans_completed,
                    last.as_secs_f32()
                ));
            }
        });

        ui.add_space(2.0);
    });
}
