//! Painters: turn resolved geometry and styles into [`Surface`](crate::surface::Surface) calls.
//!
//! Painters run in a fixed order on one surface: background (which installs the clip),
//! border, then content.

use crate::{
    foundation::core::Point,
    model::style::FillSpec,
    surface::{LinearGradient, Paint},
};

pub mod background;
pub mod border;
pub mod image;
pub mod path;
pub mod text;

/// Paint for `fill`; gradients run from `start` to `end`.
pub(crate) fn fill_paint(fill: &FillSpec, start: Point, end: Point) -> Paint {
    match fill {
        FillSpec::Solid(color) => Paint::Solid(*color),
        FillSpec::Gradient(stops) => Paint::Linear(LinearGradient {
            start,
            end,
            stops: stops.stops().to_vec(),
        }),
    }
}
