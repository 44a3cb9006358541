pub mod layout;
pub mod renderer;

pub use layout::TileLayout;
pub use renderer::Renderer;
