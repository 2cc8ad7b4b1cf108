use std::{collections::HashMap, future::Future, path::Path, sync::Arc};

use usvg::fontdb;

use crate::{
    foundation::error::{GraphicsError, GraphicsResult},
    layout::text::{CharAdvance, char_width_class},
    model::text::FontStyle,
};

/// Font request derived from a text panel's font style.
#[derive(Clone, Debug, PartialEq)]
pub struct FontQuery {
    pub style: String,
    pub variant: String,
    pub weight: String,
    pub size: f64,
    pub line_height: f64,
    pub family: String,
}

impl FontQuery {
    pub fn from_style(style: &FontStyle, default_family: &str) -> Self {
        Self {
            style: style.style.clone(),
            variant: style.variant.clone(),
            weight: style.weight.clone(),
            size: style.size,
            line_height: style.line_height,
            family: style
                .family
                .clone()
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| default_family.to_owned()),
        }
    }

    /// CSS font shorthand, e.g. `normal normal bold 16px/1.2 Inter, sans-serif`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {} {} {}px/{} {}",
            self.style, self.variant, self.weight, self.size, self.line_height, self.family
        )
    }

    /// Family names in preference order, quotes removed.
    pub fn families(&self) -> Vec<&str> {
        self.family
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
            .filter(|f| !f.is_empty())
            .collect()
    }

    fn weight_value(&self) -> u16 {
        match self.weight.trim() {
            "normal" => 400,
            "bold" | "bolder" => 700,
            "lighter" => 300,
            other => other.parse::<u16>().unwrap_or(400).clamp(1, 1000),
        }
    }

    fn fontdb_style(&self) -> fontdb::Style {
        match self.style.trim() {
            "italic" => fontdb::Style::Italic,
            s if s.starts_with("oblique") => fontdb::Style::Oblique,
            _ => fontdb::Style::Normal,
        }
    }
}

/// Raw font face bytes as handed to the shaper and the rasterizer.
#[derive(Clone)]
pub struct FontFace {
    pub family: String,
    pub data: Arc<Vec<u8>>,
    /// Face index inside a font collection.
    pub index: u32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Arc::ptr_eq(&self.data, &other.data)
    }
}

/// Asynchronous font service.
///
/// `Ok(None)` means no face matched; text is then laid out but not rasterized.
pub trait FontLoader {
    fn ensure_loaded(
        &self,
        query: &FontQuery,
    ) -> impl Future<Output = GraphicsResult<Option<FontFace>>>;
}

impl<T: FontLoader> FontLoader for &T {
    fn ensure_loaded(
        &self,
        query: &FontQuery,
    ) -> impl Future<Output = GraphicsResult<Option<FontFace>>> {
        (**self).ensure_loaded(query)
    }
}

/// Never resolves a face.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFontLoader;

impl FontLoader for NullFontLoader {
    async fn ensure_loaded(&self, _query: &FontQuery) -> GraphicsResult<Option<FontFace>> {
        Ok(None)
    }
}

/// Resolves queries against a `fontdb` database of system fonts and extra directories.
pub struct SystemFontLoader {
    db: fontdb::Database,
}

impl Default for SystemFontLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFontLoader {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self { db }
    }

    /// Database with only the fonts found in `dirs`.
    pub fn from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Self {
        let mut loader = Self {
            db: fontdb::Database::new(),
        };
        for d in dirs {
            loader.add_font_dir(d);
        }
        loader
    }

    pub fn from_database(db: fontdb::Database) -> Self {
        Self { db }
    }

    pub fn add_font_dir(&mut self, dir: impl AsRef<Path>) {
        self.db.load_fonts_dir(dir);
    }

    pub fn add_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Best face for `query`.
    ///
    /// Requested families are tried first, then the generic sans-serif family, then the
    /// first face in the database. `None` only when the database is empty.
    fn resolve(&self, query: &FontQuery) -> GraphicsResult<Option<FontFace>> {
        let names = query.families();
        let mut families: Vec<fontdb::Family<'_>> = names
            .iter()
            .map(|&name| match name.to_ascii_lowercase().as_str() {
                "serif" => fontdb::Family::Serif,
                "sans-serif" => fontdb::Family::SansSerif,
                "monospace" => fontdb::Family::Monospace,
                "cursive" => fontdb::Family::Cursive,
                "fantasy" => fontdb::Family::Fantasy,
                _ => fontdb::Family::Name(name),
            })
            .collect();
        if !families.contains(&fontdb::Family::SansSerif) {
            families.push(fontdb::Family::SansSerif);
        }

        let q = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight_value()),
            stretch: fontdb::Stretch::Normal,
            style: query.fontdb_style(),
        };

        let id = match self.db.query(&q) {
            Some(id) => id,
            None => match self.db.faces().next() {
                Some(face) => {
                    tracing::debug!(
                        requested = %query.family,
                        substitute = ?face.families.first().map(|(name, _)| name),
                        "no family matched; substituting first available face"
                    );
                    face.id
                }
                None => return Ok(None),
            },
        };
        self.load_face(id).map(Some)
    }

    fn load_face(&self, id: fontdb::ID) -> GraphicsResult<FontFace> {
        let family = self
            .db
            .face(id)
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| {
                GraphicsError::resource(format!("font data for '{family}' is unavailable"))
            })?;

        Ok(FontFace {
            family,
            data: Arc::new(data),
            index,
        })
    }
}

impl FontLoader for SystemFontLoader {
    #[tracing::instrument(level = "debug", skip(self), fields(font = %query.shorthand()))]
    async fn ensure_loaded(&self, query: &FontQuery) -> GraphicsResult<Option<FontFace>> {
        let face = self.resolve(query)?;
        match &face {
            Some(f) => tracing::debug!(family = %f.family, "font resolved"),
            None => tracing::debug!("font database is empty"),
        }
        Ok(face)
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// Registered faces are remembered so repeated layouts with one face register it once.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashMap<(usize, u32), String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    fn family_name(&mut self, face: &FontFace) -> GraphicsResult<String> {
        let key = (Arc::as_ptr(&face.data) as usize, face.index);
        if let Some(name) = self.registered.get(&key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.data.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GraphicsError::resource("no font families registered from font bytes")
        })?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GraphicsError::resource("registered font family has no name"))?
            .to_string();

        self.registered.insert(key, name.clone());
        Ok(name)
    }

    /// Shape a single unwrapped run of text.
    pub fn layout_plain(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
    ) -> GraphicsResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GraphicsError::validation(
                "font size must be finite and > 0",
            ));
        }

        let family_name = self.family_name(face)?;
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Sum of shaped glyph advances of `text`.
    pub fn advance(&mut self, text: &str, face: &FontFace, size_px: f32) -> GraphicsResult<f64> {
        let layout = self.layout_plain(text, face, size_px)?;
        let mut total = 0.0f64;
        for line in layout.lines() {
            for item in line.items() {
                if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                    total += run.glyphs().map(|g| f64::from(g.advance)).sum::<f64>();
                }
            }
        }
        Ok(total)
    }
}

/// Shaped per-character advances from one face, with the width class as fallback.
pub struct FontAdvance<'a> {
    engine: &'a mut TextLayoutEngine,
    face: &'a FontFace,
    cache: HashMap<char, f64>,
}

impl<'a> FontAdvance<'a> {
    pub fn new(engine: &'a mut TextLayoutEngine, face: &'a FontFace) -> Self {
        Self {
            engine,
            face,
            cache: HashMap::new(),
        }
    }
}

impl CharAdvance for FontAdvance<'_> {
    fn advance(&mut self, ch: char, font_size: f64) -> f64 {
        if let Some(em) = self.cache.get(&ch) {
            return em * font_size;
        }
        let mut buf = [0u8; 4];
        let em = match self
            .engine
            .advance(ch.encode_utf8(&mut buf), self.face, font_size as f32)
        {
            Ok(px) if font_size > 0.0 => px / font_size,
            Ok(_) => char_width_class(ch),
            Err(e) => {
                tracing::warn!(error = %e, ch = %ch, "shaping failed; using width class");
                char_width_class(ch)
            }
        };
        self.cache.insert(ch, em);
        em * font_size
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
