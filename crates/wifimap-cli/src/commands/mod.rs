pub mod calibrate;
pub mod config;
pub mod heatmap;
pub mod networks;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result};
use wifimap_core::config::WifiMapConfig;
use wifimap_core::observation::PixelPoint;

/// Load `path` when given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<WifiMapConfig> {
    match path {
        Some(path) => WifiMapConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(WifiMapConfig::default()),
    }
}

/// Parse an `X,Y` pixel coordinate.
pub fn parse_point(s: &str) -> std::result::Result<PixelPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    Ok(PixelPoint::new(x, y))
}
