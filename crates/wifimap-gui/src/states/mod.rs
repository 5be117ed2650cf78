mod textures;
mod ui;
mod viewport;

pub use textures::TextureCache;
pub use ui::UIState;
pub use viewport::ViewportState;
