use std::{collections::HashMap, sync::Arc};

use crate::{
    assets::{
        decode::DecodedImage,
        fonts::{FontFace, TextLayoutEngine},
    },
    foundation::{
        core::{Affine, BezPath, Point, Rect},
        error::{GraphicsError, GraphicsResult},
    },
    surface::{
        GlyphStyle, LinearGradient, Paint, Shadow, StrokeStyle, Surface,
        shadow::{blur_params, blur_rgba8_premul, tint_coverage},
    },
};

/// Rendered pixels in row-major premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Premultiplied pixel at `(x, y)`; out of range reads as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Straight-alpha RGBA8 for encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

struct ShadowLayer {
    shadow: Shadow,
    ctx: vello_cpu::RenderContext,
}

/// CPU raster surface backed by `vello_cpu`.
pub struct CpuSurface {
    width: u32,
    height: u32,
    /// `None` for zero-sized surfaces; every draw is then a no-op.
    ctx: Option<vello_cpu::RenderContext>,
    clip_depth: usize,
    shadow: Option<ShadowLayer>,
    text_engine: TextLayoutEngine,
    font_cache: HashMap<(usize, u32), vello_cpu::peniko::FontData>,
}

impl CpuSurface {
    fn target(&mut self) -> Option<&mut vello_cpu::RenderContext> {
        match &mut self.shadow {
            Some(layer) => Some(&mut layer.ctx),
            None => self.ctx.as_mut(),
        }
    }

    fn dims_u16(&self) -> GraphicsResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| GraphicsError::surface("surface width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| GraphicsError::surface("surface height exceeds u16"))?;
        Ok((w, h))
    }

    fn font_data(&mut self, face: &FontFace) -> vello_cpu::peniko::FontData {
        let key = (Arc::as_ptr(&face.data) as usize, face.index);
        self.font_cache
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(face.data.as_ref().clone()),
                    face.index,
                )
            })
            .clone()
    }

    /// Shape `text` and position its glyphs with the em box centered on `origin.y`.
    fn positioned_glyphs(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
    ) -> GraphicsResult<Option<(vello_cpu::peniko::FontData, Vec<vello_cpu::Glyph>)>> {
        let Some(face) = glyph.face.as_ref() else {
            return Ok(None);
        };
        if text.is_empty() || self.ctx.is_none() || glyph.size <= 0.0 {
            return Ok(None);
        }

        let layout = self.text_engine.layout_plain(text, face, glyph.size as f32)?;
        let mut glyphs = Vec::new();
        let mut middle = None;
        for line in layout.lines() {
            let m = line.metrics();
            let mid = *middle.get_or_insert(m.baseline - (m.ascent - m.descent) / 2.0);
            let dx = origin.x as f32;
            let dy = origin.y as f32 - mid;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x + dx,
                    y: g.y + dy,
                }));
            }
        }

        let font = self.font_data(face);
        Ok(Some((font, glyphs)))
    }

    /// Finish drawing and read the pixels back.
    pub fn into_bitmap(mut self) -> GraphicsResult<Bitmap> {
        if self.shadow.is_some() {
            self.pop_shadow()?;
        }
        let (w, h) = (self.width, self.height);
        let Some(mut ctx) = self.ctx.take() else {
            return Ok(Bitmap {
                width: w,
                height: h,
                data: Vec::new(),
            });
        };
        for _ in 0..self.clip_depth {
            ctx.pop_layer();
        }

        let (w16, h16) = self.dims_u16()?;
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Ok(Bitmap {
            width: w,
            height: h,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

impl Surface for CpuSurface {
    fn create(width: u32, height: u32) -> GraphicsResult<Self> {
        let mut surface = Self {
            width,
            height,
            ctx: None,
            clip_depth: 0,
            shadow: None,
            text_engine: TextLayoutEngine::new(),
            font_cache: HashMap::new(),
        };
        if width > 0 && height > 0 {
            let (w, h) = surface.dims_u16()?;
            surface.ctx = Some(vello_cpu::RenderContext::new(w, h));
        }
        Ok(surface)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clip(&mut self, path: &BezPath) {
        let Some(ctx) = self.target() else {
            return;
        };
        reset_transforms(ctx);
        ctx.push_clip_layer(&bezpath_to_cpu(path));
        if self.shadow.is_none() {
            self.clip_depth += 1;
        }
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        let Some(ctx) = self.target() else {
            return;
        };
        reset_transforms(ctx);
        if apply_paint(ctx, paint) {
            ctx.fill_rect(&rect_to_cpu(rect));
        }
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) {
        let Some(ctx) = self.target() else {
            return;
        };
        reset_transforms(ctx);
        let c = stroke.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
        ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> GraphicsResult<()> {
        if image.width == 0 || image.height == 0 || dest.width() <= 0.0 || dest.height() <= 0.0
        {
            return Ok(());
        }
        let Some(ctx) = self.target() else {
            return Ok(());
        };

        let pixmap = image_premul_bytes_to_pixmap(
            image.rgba8_premul.as_slice(),
            image.width,
            image.height,
        )?;
        let (w, h) = (f64::from(image.width), f64::from(image.height));
        let transform = Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);
        fill_with_pixmap(ctx, pixmap, transform);
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        paint: &Paint,
    ) -> GraphicsResult<()> {
        let Some((font, glyphs)) = self.positioned_glyphs(text, origin, glyph)? else {
            return Ok(());
        };
        let Some(ctx) = self.target() else {
            return Ok(());
        };
        reset_transforms(ctx);
        if apply_paint(ctx, paint) {
            ctx.glyph_run(&font)
                .font_size(glyph.size as f32)
                .fill_glyphs(glyphs.into_iter());
        }
        Ok(())
    }

    fn stroke_text(
        &mut self,
        text: &str,
        origin: Point,
        glyph: &GlyphStyle,
        stroke: &StrokeStyle,
    ) -> GraphicsResult<()> {
        let Some((font, glyphs)) = self.positioned_glyphs(text, origin, glyph)? else {
            return Ok(());
        };
        let Some(ctx) = self.target() else {
            return Ok(());
        };
        reset_transforms(ctx);
        let c = stroke.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
        ctx.glyph_run(&font)
            .font_size(glyph.size as f32)
            .stroke_glyphs(glyphs.into_iter());
        Ok(())
    }

    fn push_shadow(&mut self, shadow: &Shadow) -> GraphicsResult<()> {
        if self.shadow.is_some() {
            return Err(GraphicsError::surface("shadow layers do not nest"));
        }
        if self.ctx.is_none() {
            return Ok(());
        }
        let (w, h) = self.dims_u16()?;
        self.shadow = Some(ShadowLayer {
            shadow: *shadow,
            ctx: vello_cpu::RenderContext::new(w, h),
        });
        Ok(())
    }

    fn pop_shadow(&mut self) -> GraphicsResult<()> {
        let Some(mut layer) = self.shadow.take() else {
            return if self.ctx.is_none() {
                Ok(())
            } else {
                Err(GraphicsError::surface("pop_shadow without push_shadow"))
            };
        };
        let (w16, h16) = self.dims_u16()?;
        let Some(ctx) = self.ctx.as_mut() else {
            return Ok(());
        };

        let mut content = vello_cpu::Pixmap::new(w16, h16);
        layer.ctx.flush();
        layer.ctx.render_to_pixmap(&mut content);
        let coverage = content.data_as_u8_slice();

        let sh = layer.shadow;
        let tinted = tint_coverage(coverage, sh.color);
        let (radius, sigma) = blur_params(sh.blur);
        let blurred = blur_rgba8_premul(&tinted, self.width, self.height, radius, sigma)?;
        tracing::trace!(radius, sigma, "compositing shadow layer");

        let shadow_pixmap = image_premul_bytes_to_pixmap(&blurred, self.width, self.height)?;
        fill_with_pixmap(ctx, shadow_pixmap, Affine::translate(sh.offset));
        fill_with_pixmap(ctx, content, Affine::IDENTITY);
        Ok(())
    }
}

fn reset_transforms(ctx: &mut vello_cpu::RenderContext) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Fill the pixmap's own bounds, mapped through `transform`.
fn fill_with_pixmap(
    ctx: &mut vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    transform: Affine,
) {
    let (w, h) = (f64::from(pixmap.width()), f64::from(pixmap.height()));
    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Set `paint` on `ctx`. Returns false when the paint draws nothing.
fn apply_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) -> bool {
    match paint {
        Paint::Solid(c) => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            true
        }
        Paint::Linear(g) => match gradient_image(g) {
            Some((image, transform)) => {
                ctx.set_paint(image);
                ctx.set_paint_transform(affine_to_cpu(transform));
                true
            }
            None => false,
        },
    }
}

const GRADIENT_MAX_SAMPLES: f64 = 4096.0;

/// Rasterize a linear gradient into a one-row image laid along its axis.
///
/// Padded sampling extends the end colors past both ends and across the axis.
fn gradient_image(g: &LinearGradient) -> Option<(vello_cpu::Image, Affine)> {
    let axis = g.end - g.start;
    let len = axis.hypot();
    if !len.is_finite() || len < 1e-9 || g.stops.is_empty() {
        return None;
    }

    let n = len.ceil().clamp(2.0, GRADIENT_MAX_SAMPLES) as u32;
    let mut bytes = Vec::with_capacity(n as usize * 4);
    for i in 0..n {
        let t = (f64::from(i) + 0.5) / f64::from(n);
        bytes.extend_from_slice(&sample_stops(g, t as f32));
    }
    let pixmap = image_premul_bytes_to_pixmap(&bytes, n, 1).ok()?;
    let image = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };
    let transform = Affine::translate(g.start.to_vec2())
        * Affine::rotate(axis.atan2())
        * Affine::scale_non_uniform(len / f64::from(n), 1.0);
    Some((image, transform))
}

/// Premultiplied color at `t`, interpolating premultiplied channels between stops.
fn sample_stops(g: &LinearGradient, t: f32) -> [u8; 4] {
    let stops = &g.stops;
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if t <= first.offset {
        return first.color.to_premul();
    }
    if t >= last.offset {
        return last.color.to_premul();
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            let (ca, cb) = (a.color.to_premul(), b.color.to_premul());
            let mut out = [0u8; 4];
            for i in 0..4 {
                let v = f32::from(ca[i]) + (f32::from(cb[i]) - f32::from(ca[i])) * f;
                out[i] = v.round().clamp(0.0, 255.0) as u8;
            }
            return out;
        }
    }
    last.color.to_premul()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> GraphicsResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| GraphicsError::surface("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| GraphicsError::surface("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(GraphicsError::surface("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
