pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Integer pixel extent used for surfaces. Fractional parts are truncated and
/// negative or non-finite values collapse to zero.
pub fn pixel_extent(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX.
    v as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
