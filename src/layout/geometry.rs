use crate::{
    foundation::core::pixel_extent,
    layout::{
        stack::{StackItem, content_size},
        text::{MeasuredLine, widest_line},
    },
    model::{
        image::ImageGraphicsOptions,
        shorthand::{EdgeInsetSpec, Edges, SizeSpec},
        text::{TextGraphicsOptions, VerticalAlign},
    },
};

/// Subtracted from auto text height when the row count is even.
///
/// Empirical: keeps auto-sized panels visually tight around middle-baseline glyphs.
pub const AUTO_HEIGHT_FUDGE_EVEN_ROWS: f64 = 2.0;
/// Subtracted from auto text height when the row count is odd.
pub const AUTO_HEIGHT_FUDGE_ODD_ROWS: f64 = 4.0;

/// Final box of one render call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxGeometry {
    pub width: f64,
    pub height: f64,
    /// Padding plus border width on each side.
    pub insets: Edges,
}

impl BoxGeometry {
    /// Integer surface dimensions (truncated).
    pub fn surface_size(&self) -> (u32, u32) {
        (pixel_extent(self.width), pixel_extent(self.height))
    }

    /// True when either surface dimension is zero; such boxes are never painted.
    pub fn is_empty(&self) -> bool {
        let (w, h) = self.surface_size();
        w == 0 || h == 0
    }

    pub fn content_width(&self) -> f64 {
        self.width - self.insets.horizontal()
    }

    pub fn content_height(&self) -> f64 {
        self.height - self.insets.vertical()
    }
}

pub fn resolve_insets(padding: EdgeInsetSpec, border_width: f64) -> Edges {
    padding.resolve().expanded(border_width)
}

/// Height of `rows` text rows without insets, fudge applied. Zero rows give zero.
pub fn text_block_height(rows: usize, font_size: f64, row_gap: f64) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    let fudge = if rows % 2 == 0 {
        AUTO_HEIGHT_FUDGE_EVEN_ROWS
    } else {
        AUTO_HEIGHT_FUDGE_ODD_ROWS
    };
    let n = rows as f64;
    n * font_size + (n - 1.0) * row_gap - fudge
}

fn resolve_dimension(spec: SizeSpec, auto: impl FnOnce() -> f64, natural: Option<f64>) -> f64 {
    let v = match spec {
        SizeSpec::Fixed(v) => v,
        SizeSpec::Auto => auto(),
        SizeSpec::BackgroundImage => natural.unwrap_or(0.0),
    };
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextGeometry {
    pub frame: BoxGeometry,
    /// Top of the first text row.
    pub text_top: f64,
}

/// Resolve the text panel box.
///
/// `background` is the natural size of the decoded background image, used by `bgImg`.
pub fn resolve_text_geometry(
    opts: &TextGraphicsOptions,
    lines: &[MeasuredLine],
    background: Option<(u32, u32)>,
) -> TextGeometry {
    let fs = &opts.font_style;
    let insets = resolve_insets(opts.padding, opts.border_style.width);
    let (w_spec, h_spec) = opts.size.axes();
    let rows = lines.len();

    let width = resolve_dimension(
        w_spec,
        || match widest_line(lines) {
            Some(widest) => widest.width(fs.letter_spacing) + insets.horizontal(),
            None => 0.0,
        },
        background.map(|(w, _)| f64::from(w)),
    );
    let height = resolve_dimension(
        h_spec,
        || match rows {
            0 => 0.0,
            _ => text_block_height(rows, fs.size, fs.row_gap) + insets.vertical(),
        },
        background.map(|(_, h)| f64::from(h)),
    );

    let text_top = if rows > 0 && h_spec != SizeSpec::Auto {
        let text_height = text_block_height(rows, fs.size, fs.row_gap);
        match opts.align {
            VerticalAlign::Top => insets.top,
            VerticalAlign::Center => (height - text_height) / 2.0,
            VerticalAlign::Bottom => height - (text_height + insets.bottom),
        }
    } else {
        insets.top
    };

    TextGeometry {
        frame: BoxGeometry {
            width,
            height,
            insets,
        },
        text_top,
    }
}

/// Resolve the image strip box from the final item sizes.
pub fn resolve_image_geometry(
    opts: &ImageGraphicsOptions,
    items: &[StackItem],
    background: Option<(u32, u32)>,
) -> BoxGeometry {
    let insets = resolve_insets(opts.padding, opts.border_style.width);
    let (content_w, content_h) = content_size(items, opts.direction, opts.gap);
    let has_items = !items.is_empty();

    let width = resolve_dimension(
        opts.width,
        || if has_items { content_w + insets.horizontal() } else { 0.0 },
        background.map(|(w, _)| f64::from(w)),
    );
    let height = resolve_dimension(
        opts.height,
        || if has_items { content_h + insets.vertical() } else { 0.0 },
        background.map(|(_, h)| f64::from(h)),
    );

    BoxGeometry {
        width,
        height,
        insets,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
