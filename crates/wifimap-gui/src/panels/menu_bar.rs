use anyhow::Context;
use wifimap_core::io::image_io::load_floor_plan;
use wifimap_core::session::SessionEvent;

use crate::app::WifiMapApp;
use crate::messages::{SaveTarget, WorkerResult};
use crate::worker::{send, send_error};

pub fn show(ctx: &egui::Context, app: &mut WifiMapApp) {
    let actions = app.session.actions();
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add_enabled(
                        actions.new_image,
                        egui::Button::new("New Floor Plan...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_floor_plan(ctx, app);
                }

                ui.separator();

                if ui
                    .add_enabled(actions.export_csv, egui::Button::new("Export CSV..."))
                    .clicked()
                {
                    ui.close();
                    choose_save_path(ctx, app, SaveTarget::Csv);
                }
                if ui
                    .add_enabled(
                        actions.export_screenshot,
                        egui::Button::new("Export Screenshot..."),
                    )
                    .clicked()
                {
                    ui.close();
                    choose_save_path(ctx, app, SaveTarget::Screenshot);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Survey", |ui| {
                if ui
                    .add_enabled(actions.calibrate, egui::Button::new("Calibrate Scale"))
                    .clicked()
                {
                    ui.close();
                    events.push(SessionEvent::BeginCalibration);
                }
                if ui
                    .add_enabled(actions.capture, egui::Button::new("Start Capture"))
                    .clicked()
                {
                    ui.close();
                    events.push(SessionEvent::StartCapture);
                }
                if ui
                    .add_enabled(actions.stop, egui::Button::new("Stop Capture"))
                    .clicked()
                {
                    ui.close();
                    events.push(SessionEvent::StopCapture);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });

            // Capture controls stay one click away while surveying.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(actions.stop, egui::Button::new("Stop")).clicked() {
                    events.push(SessionEvent::StopCapture);
                }
                if ui.add_enabled(actions.capture, egui::Button::new("Capture")).clicked() {
                    events.push(SessionEvent::StartCapture);
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_floor_plan(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });

    for event in events {
        app.dispatch(event);
    }
}

fn open_floor_plan(ctx: &egui::Context, app: &WifiMapApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        match load_floor_plan(&path)
            .with_context(|| format!("Failed to open {}", path.display()))
        {
            Ok(plan) => send(&result_tx, &ctx, WorkerResult::FloorPlanLoaded { plan }),
            Err(e) => send_error(&result_tx, &ctx, format!("{e:#}")),
        }
    });
}

fn choose_save_path(ctx: &egui::Context, app: &WifiMapApp, target: SaveTarget) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let dialog = match target {
            SaveTarget::Csv => rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name("wifi_data.csv"),
            SaveTarget::Screenshot => rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name("heatmap.png"),
        };
        if let Some(path) = dialog.save_file() {
            send(&result_tx, &ctx, WorkerResult::SavePathChosen { target, path });
        }
    });
}
