use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::Arc;

use crate::{
    foundation::core::{BezPath, Point, Vec2},
    model::shorthand::CornerRadii,
};

/// Rounded rectangle at the origin, traced clockwise from the top-left corner.
///
/// Zero-radius corners are sharp. Background clip and border stroke both build their
/// path here, so equal radii always give identical geometry.
pub fn rounded_rect_path(width: f64, height: f64, radii: CornerRadii) -> BezPath {
    let mut path = BezPath::new();
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii;

    if tl != 0.0 {
        corner(&mut path, Point::new(tl, tl), tl, PI, true);
    } else {
        path.move_to((0.0, 0.0));
    }

    if tr != 0.0 {
        path.line_to((width - tr, 0.0));
        corner(&mut path, Point::new(width - tr, tr), tr, 1.5 * PI, false);
    } else {
        path.line_to((width, 0.0));
    }

    if br != 0.0 {
        path.line_to((width, height - br));
        corner(&mut path, Point::new(width - br, height - br), br, 0.0, false);
    } else {
        path.line_to((width, height));
    }

    if bl != 0.0 {
        path.line_to((bl, height));
        corner(&mut path, Point::new(bl, height - bl), bl, FRAC_PI_2, false);
    } else {
        path.line_to((0.0, height));
    }

    path.close_path();
    path
}

/// Append a clockwise quarter arc starting at `start_angle`.
///
/// The current point must already sit on the arc start unless `first` is set.
fn corner(path: &mut BezPath, center: Point, r: f64, start_angle: f64, first: bool) {
    let arc = Arc {
        center,
        radii: Vec2::new(r, r),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    if first {
        path.move_to(center + Vec2::new(r * start_angle.cos(), r * start_angle.sin()));
    }
    arc.to_cubic_beziers(0.1, |p1, p2, p3| path.curve_to(p1, p2, p3));
}

#[cfg(test)]
#[path = "../../tests/unit/paint/path.rs"]
mod tests;
