use crate::{
    assets::{
        decode::DecodedImage,
        fonts::{FontAdvance, FontFace, FontLoader, FontQuery, TextLayoutEngine},
        loader::ImageLoader,
    },
    foundation::{
        core::Point,
        error::{GraphicsError, GraphicsResult},
    },
    layout::{
        geometry::{resolve_image_geometry, resolve_text_geometry},
        stack::{StackItem, StackParams, place_stack},
        text::{
            CharClassAdvance, MeasuredLine, TextBlockParams, TextMeasurement, layout_text_block,
            measure_lines,
        },
    },
    model::{
        image::{Direction, ImageGraphicsOptions},
        style::BackgroundStyle,
        text::TextGraphicsOptions,
    },
    paint::{
        background::paint_background, border::paint_border, image::paint_images, text::paint_text,
    },
    render::settings::RenderSettings,
    surface::{GlyphStyle, Surface},
};

/// Renders text panels and image strips onto any [`Surface`].
///
/// Resources are loaded in declaration order before anything is drawn: the font first
/// (text only, best effort), then the background image, then content images. Any image
/// failure aborts the call.
#[derive(Clone, Debug, Default)]
pub struct GraphicsRenderer<I, F> {
    images: I,
    fonts: F,
    settings: RenderSettings,
}

impl<I: ImageLoader, F: FontLoader> GraphicsRenderer<I, F> {
    pub fn new(images: I, fonts: F) -> Self {
        Self::with_settings(images, fonts, RenderSettings::default())
    }

    pub fn with_settings(images: I, fonts: F, settings: RenderSettings) -> Self {
        Self {
            images,
            fonts,
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Multi-line styled text panel.
    ///
    /// A zero resolved dimension yields an unpainted surface of that size.
    #[tracing::instrument(skip_all, fields(lines = tracing::field::Empty))]
    pub async fn text_graphics<S: Surface>(
        &self,
        opts: &TextGraphicsOptions,
    ) -> GraphicsResult<S> {
        let fs = &opts.font_style;
        if !fs.size.is_finite() {
            return Err(GraphicsError::validation(format!(
                "font size must be finite, got {}",
                fs.size
            )));
        }
        let lines = opts.lines();
        tracing::Span::current().record("lines", lines.len());

        let query = FontQuery::from_style(fs, &self.settings.default_font_family);
        let face = self.load_font(&query).await;
        let background = self.load_background(&opts.background_style).await?;

        let measured = self.measure(&lines, fs.size, face.as_ref());
        let geom = resolve_text_geometry(
            opts,
            &measured,
            background.as_ref().map(DecodedImage::natural_size),
        );
        let frame = geom.frame;
        let (w, h) = frame.surface_size();
        let mut surface = S::create(w, h)?;
        if frame.is_empty() {
            tracing::debug!(w, h, "empty text box; nothing to paint");
            return Ok(surface);
        }

        paint_background(
            &mut surface,
            &frame,
            &opts.background_style,
            opts.border_style.radius.resolve(),
            background.as_ref(),
        )?;
        paint_border(&mut surface, &frame, &opts.border_style);

        let placed = layout_text_block(
            &measured,
            &TextBlockParams {
                origin: Point::new(frame.insets.left, geom.text_top),
                content_width: frame.content_width(),
                font_size: fs.size,
                row_gap: fs.row_gap,
                letter_spacing: fs.letter_spacing,
                align: fs.text_align,
            },
        );
        paint_text(
            &mut surface,
            &placed,
            fs,
            &GlyphStyle {
                size: fs.size,
                face,
            },
        )?;
        Ok(surface)
    }

    /// Images stacked along `direction`, aligned on the cross axis and painted by z-index.
    #[tracing::instrument(skip_all, fields(images = tracing::field::Empty))]
    pub async fn image_graphics<S: Surface>(
        &self,
        opts: &ImageGraphicsOptions,
    ) -> GraphicsResult<S> {
        let background = self.load_background(&opts.background_style).await?;

        let sources = opts.imgs.sources();
        tracing::Span::current().record("images", sources.len());
        let mut images = Vec::with_capacity(sources.len());
        for src in &sources {
            images.push(self.images.decode(src.url()).await?);
        }

        let items: Vec<StackItem> = sources
            .iter()
            .zip(&images)
            .enumerate()
            .map(|(index, (src, img))| {
                let (nw, nh) = img.natural_size();
                let (ow, oh) = src.size_override();
                StackItem {
                    width: ow.unwrap_or(f64::from(nw)),
                    height: oh.unwrap_or(f64::from(nh)),
                    z_index: src.z_index(),
                    index,
                }
            })
            .collect();

        let frame = resolve_image_geometry(
            opts,
            &items,
            background.as_ref().map(DecodedImage::natural_size),
        );
        let (w, h) = frame.surface_size();
        let mut surface = S::create(w, h)?;
        if frame.is_empty() {
            tracing::debug!(w, h, "empty image box; nothing to paint");
            return Ok(surface);
        }

        paint_background(
            &mut surface,
            &frame,
            &opts.background_style,
            opts.border_style.radius.resolve(),
            background.as_ref(),
        )?;
        paint_border(&mut surface, &frame, &opts.border_style);

        let cross_extent = match opts.direction {
            Direction::Vertical => frame.content_width(),
            Direction::Horizontal => frame.content_height(),
        };
        let placements = place_stack(
            &items,
            &StackParams {
                direction: opts.direction,
                align: opts.img_align,
                gap: opts.gap,
                origin: Point::new(frame.insets.left, frame.insets.top),
                cross_extent,
            },
        );
        paint_images(&mut surface, &placements, &images)?;
        Ok(surface)
    }

    async fn load_font(&self, query: &FontQuery) -> Option<FontFace> {
        match self.fonts.ensure_loaded(query).await {
            Ok(Some(face)) => Some(face),
            Ok(None) => {
                tracing::debug!(font = %query.shorthand(), "no face resolved");
                None
            }
            Err(e) => {
                tracing::warn!(
                    font = %query.shorthand(),
                    error = %e,
                    "font load failed; drawing without a face"
                );
                None
            }
        }
    }

    async fn load_background(
        &self,
        style: &BackgroundStyle,
    ) -> GraphicsResult<Option<DecodedImage>> {
        match style.image_source() {
            Some(src) => Ok(Some(self.images.decode(src).await?)),
            None => Ok(None),
        }
    }

    fn measure(
        &self,
        lines: &[&str],
        font_size: f64,
        face: Option<&FontFace>,
    ) -> Vec<MeasuredLine> {
        match (self.settings.text_measurement, face) {
            (TextMeasurement::FontAdvance, Some(face)) => {
                let mut engine = TextLayoutEngine::new();
                measure_lines(lines, font_size, &mut FontAdvance::new(&mut engine, face))
            }
            (TextMeasurement::FontAdvance, None) => {
                tracing::debug!("font-advance measurement without a face; using width classes");
                measure_lines(lines, font_size, &mut CharClassAdvance)
            }
            (TextMeasurement::CharClass, _) => {
                measure_lines(lines, font_size, &mut CharClassAdvance)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
