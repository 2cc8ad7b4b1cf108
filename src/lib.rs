//! canvas-graphics lays out declarative text panels and image strips and paints them
//! onto a drawing surface.
//!
//! A render call runs in a fixed order:
//!
//! - Load resources through an [`ImageLoader`] and a [`FontLoader`]
//! - Resolve shorthand options into pixel geometry ([`layout`])
//! - Create a [`Surface`] and paint background, border and content ([`paint`])
//!
//! [`CpuSurface`] rasterizes with `vello_cpu`; [`RecordingSurface`] keeps the draw calls.
#![forbid(unsafe_code)]

pub mod assets;
pub mod foundation;
pub mod layout;
pub mod model;
pub mod paint;
pub mod render;
pub mod surface;

pub use crate::assets::decode::DecodedImage;
pub use crate::assets::fonts::{FontFace, FontLoader, FontQuery, NullFontLoader, SystemFontLoader};
pub use crate::assets::loader::{FsImageLoader, ImageLoader, MemoryImageLoader};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{BezPath, Point, Rect, Vec2};
pub use crate::foundation::error::{GraphicsError, GraphicsResult};
pub use crate::layout::text::TextMeasurement;
pub use crate::model::image::ImageGraphicsOptions;
pub use crate::model::text::TextGraphicsOptions;
pub use crate::render::{GraphicsRenderer, RenderSettings};
pub use crate::surface::{Bitmap, CpuSurface, DrawOp, RecordingSurface, Surface};
