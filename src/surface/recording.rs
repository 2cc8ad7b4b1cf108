use crate::{
    assets::decode::DecodedImage,
    foundation::{
        core::{BezPath, Point, Rect},
        error::{GraphicsError, GraphicsResult},
    },
    surface::{GlyphStyle, Paint, Shadow, StrokeStyle, Surface},
};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clip(BezPath),
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokePath {
        path: BezPath,
        stroke: StrokeStyle,
    },
    Image {
        size: (u32, u32),
        dest: Rect,
    },
    FillText {
        text: String,
        origin: Point,
        size: f64,
        paint: Paint,
    },
    StrokeText {
        text: String,
        origin: Point,
        size: f64,
        stroke: StrokeStyle,
    },
    PushShadow(Shadow),
    PopShadow,
}

/// Surface that records calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    shadow_depth: usize,
}

impl RecordingSurface {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text calls in order, as `(text, origin)`.
    pub fn fill_text_calls(&self) -> Vec<(&str, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect()
    }

    pub fn image_calls(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { dest, .. } => Some(*dest),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn create(width: u32, height: u32) -> GraphicsResult<Self> {
        Ok(Self {
            width,
            height,
            ..Default::default()
        })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clip(&mut self, path: &BezPath) {
        self.ops.push(DrawOp::Clip(path.clone()));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            stroke: *stroke,
        });
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> GraphicsResult<()> {
        self.ops.push(DrawOp::Image {
            size: image.natural_size(),
            dest,
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        paint: &Paint,
    ) -> GraphicsResult<()> {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            origin,
            size: glyph.size,
            paint: paint.clone(),
        });
        Ok(())
    }

    fn stroke_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        stroke: &StrokeStyle,
    ) -> GraphicsResult<()> {
        self.ops.push(DrawOp::StrokeText {
            text: text.to_owned(),
            origin,
            size: glyph.size,
            stroke: *stroke,
        });
        Ok(())
    }

    fn push_shadow(&mut self, shadow: &Shadow) -> GraphicsResult<()> {
        if self.shadow_depth > 0 {
            return Err(GraphicsError::surface("shadow layers do not nest"));
        }
        self.shadow_depth += 1;
        self.ops.push(DrawOp::PushShadow(*shadow));
        Ok(())
    }

    fn pop_shadow(&mut self) -> GraphicsResult<()> {
        if self.shadow_depth == 0 {
            return Err(GraphicsError::surface("pop_shadow without push_shadow"));
        }
        self.shadow_depth -= 1;
        self.ops.push(DrawOp::PopShadow);
        Ok(())
    }
}
