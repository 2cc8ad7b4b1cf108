use crate::{
    assets::decode::DecodedImage,
    foundation::{
        core::{Point, Rect},
        error::GraphicsResult,
    },
    layout::geometry::BoxGeometry,
    model::{
        shorthand::CornerRadii,
        style::{BackgroundStyle, FillMode, GradientDirection},
    },
    paint::{fill_paint, path::rounded_rect_path},
    surface::Surface,
};

/// Clip to the rounded box and fill it.
///
/// Does nothing, not even clipping, when the style has neither color nor image.
/// `image` is the decoded `style.image`; the clip stays installed afterwards.
#[tracing::instrument(level = "debug", skip_all)]
pub fn paint_background<S: Surface>(
    surface: &mut S,
    frame: &BoxGeometry,
    style: &BackgroundStyle,
    radii: CornerRadii,
    image: Option<&DecodedImage>,
) -> GraphicsResult<()> {
    if style.is_empty() {
        return Ok(());
    }

    let (w, h) = (frame.width, frame.height);
    surface.clip(&rounded_rect_path(w, h, radii));

    if let Some(color) = &style.color {
        let end = match style.direction {
            GradientDirection::Horizontal => Point::new(w, 0.0),
            GradientDirection::Vertical => Point::new(0.0, h),
            GradientDirection::Diagonal => Point::new(w, h),
        };
        surface.fill_rect(
            Rect::new(0.0, 0.0, w, h),
            &fill_paint(color, Point::ZERO, end),
        );
    }

    if let Some(image) = image {
        let dest = background_image_rect(frame, style, image);
        surface.draw_image(image, dest)?;
    }
    Ok(())
}

/// Where the background image lands: at `position`, sized against the fill-mode base.
pub fn background_image_rect(
    frame: &BoxGeometry,
    style: &BackgroundStyle,
    image: &DecodedImage,
) -> Rect {
    let (base_w, base_h) = match style.fill {
        FillMode::Ctx => (frame.width, frame.height),
        FillMode::Img => {
            let (w, h) = image.natural_size();
            (f64::from(w), f64::from(h))
        }
    };
    let (w, h) = match style.size {
        Some(size) => {
            let (sw, sh) = size.axes();
            (sw.resolve(base_w), sh.resolve(base_h))
        }
        None => (base_w, base_h),
    };
    let origin = style.position.unwrap_or_default().resolve();
    Rect::from_origin_size(origin, (w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/background.rs"]
mod tests;
