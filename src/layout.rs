//! Pixel geometry: box sizes, insets, text line placement and image stacking.
//!
//! Everything here is pure arithmetic over resolved option values. No drawing
//! happens until a [`BoxGeometry`](geometry::BoxGeometry) has been produced.

use crate::model::{image::ImgAlign, text::TextAlign};

pub mod geometry;
pub mod stack;
pub mod text;

/// Offset of `content` inside `container` for the given alignment.
///
/// Slack is not clamped: content larger than its container gets a negative
/// offset for `Center` and `End`.
pub(crate) fn align_offset<A>(container: f64, content: f64, align: A) -> f64
where
    A: Into<AlignKind>,
{
    let rem = container - content;
    match align.into() {
        AlignKind::Start => 0.0,
        AlignKind::Center => rem * 0.5,
        AlignKind::End => rem,
    }
}

pub(crate) enum AlignKind {
    Start,
    Center,
    End,
}

impl From<TextAlign> for AlignKind {
    fn from(value: TextAlign) -> Self {
        match value {
            TextAlign::Left => AlignKind::Start,
            TextAlign::Center => AlignKind::Center,
            TextAlign::Right => AlignKind::End,
        }
    }
}

impl From<ImgAlign> for AlignKind {
    fn from(value: ImgAlign) -> Self {
        match value {
            ImgAlign::Start => AlignKind::Start,
            ImgAlign::Center => AlignKind::Center,
            ImgAlign::End => AlignKind::End,
        }
    }
}
