use crate::{
    layout::geometry::BoxGeometry,
    model::style::BorderStyle,
    paint::path::rounded_rect_path,
    surface::{StrokeStyle, Surface},
};

/// Stroke the rounded box outline. No-op for zero width or an unset color.
pub fn paint_border<S: Surface>(surface: &mut S, frame: &BoxGeometry, style: &BorderStyle) {
    let Some(color) = style.color else {
        return;
    };
    if style.width == 0.0 {
        return;
    }
    let path = rounded_rect_path(frame.width, frame.height, style.radius.resolve());
    surface.stroke_path(
        &path,
        &StrokeStyle {
            width: style.width,
            color,
        },
    );
}

#[cfg(test)]
#[path = "../../tests/unit/paint/border.rs"]
mod tests;
