use tracing::debug;

use super::{Legend, Overlay};

/// Live overlays keyed by network label, plus the shared legend.
///
/// Each label has at most one overlay; showing a label again replaces its
/// previous overlay in place. The legend is created by the first overlay
/// and kept when overlays are removed.
#[derive(Clone, Debug, Default)]
pub struct OverlayRegistry {
    overlays: Vec<Overlay>,
    legend: Option<Legend>,
    next_revision: u64,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `overlay` for its label, returning the overlay it replaced.
    /// `legend` is used only if no legend exists yet.
    pub fn show(&mut self, mut overlay: Overlay, legend: Legend) -> Option<Overlay> {
        if self.legend.is_none() {
            debug!("Legend initialized");
            self.legend = Some(legend);
        }
        self.next_revision += 1;
        overlay.revision = self.next_revision;

        match self.overlays.iter_mut().find(|o| o.label == overlay.label) {
            Some(slot) => Some(std::mem::replace(slot, overlay)),
            None => {
                self.overlays.push(overlay);
                None
            }
        }
    }

    pub fn remove(&mut self, label: &str) -> Option<Overlay> {
        let idx = self.overlays.iter().position(|o| o.label == label)?;
        Some(self.overlays.remove(idx))
    }

    pub fn get(&self, label: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Overlays in the order they were first shown (bottom to top).
    pub fn iter(&self) -> std::slice::Iter<'_, Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Drop every overlay and the legend.
    pub fn clear(&mut self) {
        self.overlays.clear();
        self.legend = None;
    }
}
