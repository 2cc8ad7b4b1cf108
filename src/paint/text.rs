use crate::{
    foundation::{
        core::{Point, Vec2},
        error::GraphicsResult,
    },
    layout::text::PlacedLine,
    model::text::FontStyle,
    paint::fill_paint,
    surface::{GlyphStyle, Shadow, StrokeStyle, Surface},
};

/// Draw placed text: one main pass, then one more pass per shadow.
///
/// Each shadow pass is bracketed by `push_shadow`/`pop_shadow`, so no shadow state
/// survives into the next pass.
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn paint_text<S: Surface>(
    surface: &mut S,
    lines: &[PlacedLine],
    style: &FontStyle,
    glyph: &GlyphStyle,
) -> GraphicsResult<()> {
    draw_pass(surface, lines, style, glyph)?;

    for s in style.shadows() {
        surface.push_shadow(&Shadow {
            color: s.color,
            blur: s.blur,
            offset: Vec2::new(s.offset_x, s.offset_y),
        })?;
        draw_pass(surface, lines, style, glyph)?;
        surface.pop_shadow()?;
    }
    Ok(())
}

fn draw_pass<S: Surface>(
    surface: &mut S,
    lines: &[PlacedLine],
    style: &FontStyle,
    glyph: &GlyphStyle,
) -> GraphicsResult<()> {
    let half = style.size / 2.0;
    let stroke = (style.border.width != 0.0).then_some(StrokeStyle {
        width: style.border.width,
        color: style.border.color,
    });

    let mut buf = [0u8; 4];
    for line in lines {
        for c in &line.chars {
            let text = c.ch.encode_utf8(&mut buf);
            let origin = Point::new(c.x, line.y);
            // Gradients restart on every character, top to bottom of its em box.
            let paint = fill_paint(
                &style.color,
                Point::new(c.x, line.y - half),
                Point::new(c.x, line.y + half),
            );
            surface.fill_text(text, origin, glyph, &paint)?;
            if let Some(stroke) = &stroke {
                surface.stroke_text(text, origin, glyph, stroke)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/paint/text.rs"]
mod tests;
