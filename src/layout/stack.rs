use crate::{
    foundation::core::{Point, Rect},
    layout::align_offset,
    model::image::{Direction, ImgAlign},
};

/// An image with its final drawn size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackItem {
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    /// Sequence position; decides placement along the main axis.
    pub index: usize,
}

impl StackItem {
    fn main(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Vertical => self.height,
            Direction::Horizontal => self.width,
        }
    }

    fn cross(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Vertical => self.width,
            Direction::Horizontal => self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub rect: Rect,
}

/// Largest cross-axis extent among `items`.
pub fn cross_extent(items: &[StackItem], direction: Direction) -> f64 {
    items
        .iter()
        .map(|i| i.cross(direction))
        .fold(0.0, f64::max)
}

/// `(width, height)` of the stacked content, gaps included.
pub fn content_size(items: &[StackItem], direction: Direction, gap: f64) -> (f64, f64) {
    let main = items.iter().map(|i| i.main(direction)).sum::<f64>()
        + (items.len().saturating_sub(1) as f64) * gap;
    let cross = cross_extent(items, direction);
    match direction {
        Direction::Vertical => (cross, main),
        Direction::Horizontal => (main, cross),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackParams {
    pub direction: Direction,
    pub align: ImgAlign,
    pub gap: f64,
    /// Top-left corner of the content box.
    pub origin: Point,
    /// Content box cross extent; zero falls back to the widest item.
    pub cross_extent: f64,
}

/// Placements in paint order: stable by `z_index`, so equal z keeps sequence order.
///
/// Main-axis offsets depend only on sequence indices, never on z.
pub fn place_stack(items: &[StackItem], params: &StackParams) -> Vec<Placement> {
    let dir = params.direction;
    let band = if params.cross_extent != 0.0 {
        params.cross_extent
    } else {
        cross_extent(items, dir)
    };

    let mut order: Vec<&StackItem> = items.iter().collect();
    order.sort_by_key(|i| i.z_index);

    order
        .into_iter()
        .map(|item| {
            let before: f64 = items
                .iter()
                .filter(|other| other.index < item.index)
                .map(|other| other.main(dir))
                .sum();
            let main = before + params.gap * item.index as f64;
            let cross = align_offset(band, item.cross(dir), params.align);

            let (dx, dy) = match dir {
                Direction::Vertical => (cross, main),
                Direction::Horizontal => (main, cross),
            };
            let x = params.origin.x + dx;
            let y = params.origin.y + dy;
            Placement {
                index: item.index,
                rect: Rect::new(x, y, x + item.width, y + item.height),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
