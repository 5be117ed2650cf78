use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use tracing::{info, warn};
use wifimap_core::config::WifiMapConfig;
use wifimap_core::io::image_io::save_rgb;
use wifimap_core::scan::ScanTimer;
use wifimap_core::session::{Session, SessionEffect, SessionEvent};

use crate::messages::{SaveTarget, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{TextureCache, UIState, ViewportState};
use crate::worker;

pub struct WifiMapApp {
    ctx: egui::Context,
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub timer: ScanTimer,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub textures: TextureCache,
}

impl WifiMapApp {
    pub fn new(ctx: &egui::Context, config: WifiMapConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone(), config.scanner.clone());
        let timer = ScanTimer::new(config.scanner.interval());

        Self {
            ctx: ctx.clone(),
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(config),
            timer,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            textures: TextureCache::default(),
        }
    }

    /// Feed one event to the session and carry out the resulting effects.
    pub fn dispatch(&mut self, event: SessionEvent) {
        if matches!(event, SessionEvent::LoadImage(_)) {
            self.textures.invalidate_plan();
            self.viewport.fit_pending = true;
            self.viewport.dragging_marker = None;
        }

        for effect in self.session.dispatch(event) {
            match effect {
                SessionEffect::StartTimer => self.timer.start(Instant::now()),
                SessionEffect::StopTimer => self.timer.stop(),
                SessionEffect::LaunchScan => self.send_command(WorkerCommand::Scan),
                SessionEffect::CancelScan => self.send_command(WorkerCommand::Cancel),
            }
        }

        if let Some(status) = self.session.take_status() {
            self.ui_state.add_log(status);
        }
        // Textures follow the session on the next frame.
        self.ctx.request_repaint();
    }

    /// Drain all pending results from the worker and dialog threads.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ScanFinished { records, elapsed } => {
                    self.ui_state.last_scan = Some(elapsed);
                    self.ui_state.scans_completed += 1;
                    if records.is_empty() {
                        self.ui_state.add_log("Scan returned no networks".into());
                    }
                    self.dispatch(SessionEvent::ScanFinished(records));
                }
                WorkerResult::FloorPlanLoaded { plan } => {
                    let name = plan
                        .source
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        name,
                        plan.width(),
                        plan.height()
                    ));
                    self.dispatch(SessionEvent::LoadImage(plan));
                }
                WorkerResult::SavePathChosen { target, path } => self.save(target, &path),
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn save(&mut self, target: SaveTarget, path: &Path) {
        let result = match target {
            SaveTarget::Csv => self
                .session
                .export_csv(path)
                .map(|rows| format!("Saved {rows} observations to {}", path.display())),
            SaveTarget::Screenshot => self
                .session
                .screenshot(true)
                .and_then(|img| save_rgb(&img, path))
                .map(|()| format!("Saved: {}", path.display())),
        };
        match result {
            Ok(message) => {
                info!(path = %path.display(), ?target, "Export complete");
                self.ui_state.add_log(message);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Export failed");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    fn drive_timer(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.timer.fire(now) {
            self.dispatch(SessionEvent::TimerTick);
        }
        if let Some(wait) = self.timer.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for WifiMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.drive_timer(ctx);
        self.textures.sync(ctx, &self.session);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::networks::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::calibration::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Wi-Fi Heatmap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Wi-Fi Heatmap");
                        ui.label("Signal strength survey over a floor plan");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
