//! Drawing surface capability consumed by the painters.
//!
//! Every call carries its full style. Surfaces keep no implicit fill, stroke or
//! font state between calls; only the clip and the shadow layer are stateful.

use crate::{
    assets::{decode::DecodedImage, fonts::FontFace},
    foundation::{
        color::Rgba8,
        core::{BezPath, Point, Rect, Vec2},
        error::GraphicsResult,
    },
    model::style::GradientStop,
};

pub mod cpu;
pub mod recording;
pub mod shadow;

pub use cpu::{Bitmap, CpuSurface};
pub use recording::{DrawOp, RecordingSurface};

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Rgba8,
}

/// Font and size for a character draw. Without a face nothing is rasterized.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphStyle {
    pub size: f64,
    pub face: Option<FontFace>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba8,
    pub blur: f64,
    pub offset: Vec2,
}

pub trait Surface: Sized {
    /// A transparent surface of `width x height` pixels. Zero dimensions are allowed.
    fn create(width: u32, height: u32) -> GraphicsResult<Self>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Intersect the clip with `path`. The clip stays for the surface's lifetime.
    fn clip(&mut self, path: &BezPath);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle);

    /// Draw `image` scaled into `dest`.
    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> GraphicsResult<()>;

    /// Draw `text` with its left edge at `origin.x` and its em box centered on `origin.y`.
    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        paint: &Paint,
    ) -> GraphicsResult<()>;

    fn stroke_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        stroke: &StrokeStyle,
    ) -> GraphicsResult<()>;

    /// Draws until the matching [`Surface::pop_shadow`] also cast `shadow`.
    fn push_shadow(&mut self, shadow: &Shadow) -> GraphicsResult<()>;

    fn pop_shadow(&mut self) -> GraphicsResult<()>;
}
