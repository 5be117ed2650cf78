use wifimap_core::network::{band_label, Band};
use wifimap_core::session::SessionEvent;

use super::section_header;
use crate::app::WifiMapApp;

const RIGHT_PANEL_WIDTH: f32 = 320.0;

pub fn show(ctx: &egui::Context, app: &mut WifiMapApp) {
    let mut events = Vec::new();

    egui::SidePanel::right("networks")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);
                network_section(ui, app, &mut events);
                ui.separator();
                latest_scan_section(ui, app);
            });
        });

    for event in events {
        app.dispatch(event);
    }
}

fn network_section(ui: &mut egui::Ui, app: &WifiMapApp, events: &mut Vec<SessionEvent>) {
    let networks = app.session.networks();
    let count = format!("{}", networks.len());
    section_header(ui, "Networks", Some(&count));

    if networks.is_empty() {
        ui.label(
            egui::RichText::new("Networks appear here once a capture is running")
                .color(egui::Color32::from_gray(120)),
        );
        return;
    }

    for entry in networks.entries() {
        let label = &entry.identity.label;
        let mut checked = entry.checked;
        let overlay = app.session.overlays().get(label);
        let text = match overlay {
            Some(o) => format!("{label}  ({} samples)", o.sample_count),
            None => label.clone(),
        };
        if ui.checkbox(&mut checked, text).changed() {
            events.push(SessionEvent::ToggleNetwork {
                label: label.clone(),
                enabled: checked,
            });
        }
    }
}

fn latest_scan_section(ui: &mut egui::Ui, app: &WifiMapApp) {
    let records = app.session.latest_scan();
    let count = format!("{}", records.len());
    section_header(ui, "Latest Scan", Some(&count));

    if records.is_empty() {
        return;
    }

    egui::Grid::new("latest_scan")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui| {
            ui.strong("SSID");
            ui.strong("BSSID");
            ui.strong("RSSI");
            ui.strong("Band");
            ui.end_row();

            for record in records {
                ui.label(record.network_name());
                ui.monospace(record.bssid.as_deref().unwrap_or("-"));
                match record.rssi {
                    Some(rssi) => ui.label(format!("{rssi} dBm")),
                    None => ui.label("-"),
                };
                let band = record
                    .channel_frequency
                    .map(band_label)
                    .unwrap_or(Band::Unknown);
                ui.label(band.to_string());
                ui.end_row();
            }
        });
}
