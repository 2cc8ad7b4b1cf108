//! Render entry points: resources, geometry, surface, painters.

pub mod pipeline;
pub mod settings;

pub use pipeline::GraphicsRenderer;
pub use settings::RenderSettings;
