mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::Path;

use wifimap_core::config::WifiMapConfig;

/// Config read from the working directory when present.
const CONFIG_FILE: &str = "wifimap.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Wi-Fi Heatmap"),
        ..Default::default()
    };

    eframe::run_native(
        "WifiMap",
        options,
        Box::new(|cc| Ok(Box::new(app::WifiMapApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_config(path: &Path) -> WifiMapConfig {
    if !path.exists() {
        return WifiMapConfig::default();
    }
    match WifiMapConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
            WifiMapConfig::default()
        }
    }
}
