use std::collections::HashMap;

use wifimap_core::render::OverlayRegistry;
use wifimap_core::session::Session;

use crate::convert::{rgb_to_color_image, rgba_to_color_image};

/// Legend bar texture size, before scaling into the viewport.
const LEGEND_TEXTURE_SIZE: [u32; 2] = [16, 256];

/// GPU copies of the session's images, refreshed when their source changes.
#[derive(Default)]
pub struct TextureCache {
    pub plan: Option<egui::TextureHandle>,
    /// Bumped whenever a new floor plan is loaded.
    pub plan_generation: u64,
    loaded_generation: u64,
    /// Overlay textures by label, with the overlay revision they show.
    pub overlays: HashMap<String, (u64, egui::TextureHandle)>,
    pub legend: Option<egui::TextureHandle>,
}

impl TextureCache {
    pub fn invalidate_plan(&mut self) {
        self.plan_generation += 1;
    }

    /// Bring every texture in line with `session`.
    pub fn sync(&mut self, ctx: &egui::Context, session: &Session) {
        self.sync_plan(ctx, session);
        self.sync_overlays(ctx, session.overlays());
        self.sync_legend(ctx, session.overlays());
    }

    fn sync_plan(&mut self, ctx: &egui::Context, session: &Session) {
        if self.plan.is_some() && self.loaded_generation == self.plan_generation {
            return;
        }
        self.plan = session.plan().map(|plan| {
            ctx.load_texture(
                "floor_plan",
                rgb_to_color_image(&plan.image),
                egui::TextureOptions::LINEAR,
            )
        });
        self.loaded_generation = self.plan_generation;
    }

    fn sync_overlays(&mut self, ctx: &egui::Context, registry: &OverlayRegistry) {
        self.overlays.retain(|label, _| registry.contains(label));
        for overlay in registry.iter() {
            let current = self.overlays.get(&overlay.label).map(|(rev, _)| *rev);
            if current == Some(overlay.revision) {
                continue;
            }
            let texture = ctx.load_texture(
                format!("overlay:{}", overlay.label),
                rgba_to_color_image(&overlay.image),
                egui::TextureOptions::LINEAR,
            );
            self.overlays
                .insert(overlay.label.clone(), (overlay.revision, texture));
        }
    }

    fn sync_legend(&mut self, ctx: &egui::Context, registry: &OverlayRegistry) {
        match (registry.legend(), self.legend.is_some()) {
            (Some(legend), false) => {
                let [w, h] = LEGEND_TEXTURE_SIZE;
                self.legend = Some(ctx.load_texture(
                    "legend",
                    rgba_to_color_image(&legend.gradient(w, h)),
                    egui::TextureOptions::LINEAR,
                ));
            }
            (None, true) => self.legend = None,
            _ => {}
        }
    }
}
