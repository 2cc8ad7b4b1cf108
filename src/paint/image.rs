use crate::{
    assets::decode::DecodedImage,
    foundation::error::{GraphicsError, GraphicsResult},
    layout::stack::Placement,
    surface::Surface,
};

/// Draw `images` at their placements, in placement order.
///
/// `Placement::index` indexes into `images`.
pub fn paint_images<S: Surface>(
    surface: &mut S,
    placements: &[Placement],
    images: &[DecodedImage],
) -> GraphicsResult<()> {
    for p in placements {
        let image = images.get(p.index).ok_or_else(|| {
            GraphicsError::validation(format!(
                "placement {} has no decoded image ({} available)",
                p.index,
                images.len()
            ))
        })?;
        surface.draw_image(image, p.rect)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/paint/image.rs"]
mod tests;
