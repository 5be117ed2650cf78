use tracing::{debug, info, warn};

use crate::error::WifiMapError;
use crate::heatmap::interpolate;
use crate::render::{render_overlay, Legend};

use super::Session;

impl Session {
    pub(super) fn toggle_network(&mut self, label: &str, enabled: bool) {
        if !self.networks.set_checked(label, enabled) {
            debug!(label, "Toggle for unknown network ignored");
            return;
        }
        if enabled {
            self.show_heatmap(label);
        } else {
            if self.overlays.remove(label).is_some() {
                info!(label, "Overlay removed");
            }
            self.banner = None;
        }
    }

    /// Recompute and display the heatmap for `label`, replacing any
    /// previous overlay for it.
    fn show_heatmap(&mut self, label: &str) {
        self.location_markers.clear();
        self.banner = None;

        if self.plan.is_none() {
            self.set_status(WifiMapError::NoImage.to_string());
            return;
        }
        let Some(scale) = self.scale else {
            self.set_status(WifiMapError::NotCalibrated.to_string());
            return;
        };
        let (Some(entry), Some(plan)) = (self.networks.get(label), self.plan.as_ref()) else {
            return;
        };

        let samples = self.store.filter_by_members(&entry.identity.members);
        let result = interpolate(
            samples,
            scale,
            plan.width(),
            plan.height(),
            &self.config.heatmap,
        );

        match result {
            Ok(raster) => {
                let display = &self.config.display;
                let overlay = render_overlay(&raster, label, display);
                let legend = Legend::new(display.range(), display.colormap);
                self.overlays.show(overlay, legend);
                info!(label, samples = raster.sample_count, "Overlay shown");
            }
            Err(WifiMapError::InsufficientData { found, .. }) => {
                debug!(label, found, "Not enough data for heatmap");
                self.banner = Some(format!(
                    "Not enough data to create heatmap for {label} network"
                ));
            }
            Err(e) => {
                warn!(label, error = %e, "Heatmap failed");
                self.set_status(format!("Heatmap for {label} failed: {e}"));
            }
        }
    }
}
