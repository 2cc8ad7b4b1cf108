use super::*;

fn item(width: f64, height: f64, z_index: i32, index: usize) -> StackItem {
    StackItem {
        width,
        height,
        z_index,
        index,
    }
}

fn params(direction: Direction, align: ImgAlign, gap: f64, cross: f64) -> StackParams {
    StackParams {
        direction,
        align,
        gap,
        origin: Point::new(0.0, 0.0),
        cross_extent: cross,
    }
}

#[test]
fn vertical_content_height_ignores_z_order() {
    let a = [item(10.0, 30.0, 0, 0), item(20.0, 30.0, 0, 1), item(5.0, 30.0, 0, 2)];
    let b = [item(10.0, 30.0, 5, 0), item(20.0, 30.0, -1, 1), item(5.0, 30.0, 2, 2)];

    assert_eq!(content_size(&a, Direction::Vertical, 4.0), (20.0, 98.0));
    assert_eq!(content_size(&b, Direction::Vertical, 4.0), (20.0, 98.0));

    let ya: Vec<(usize, f64)> = place_stack(&a, &params(Direction::Vertical, ImgAlign::Start, 4.0, 0.0))
        .iter()
        .map(|p| (p.index, p.rect.y0))
        .collect();
    let mut yb: Vec<(usize, f64)> =
        place_stack(&b, &params(Direction::Vertical, ImgAlign::Start, 4.0, 0.0))
            .iter()
            .map(|p| (p.index, p.rect.y0))
            .collect();
    yb.sort_by_key(|(i, _)| *i);
    assert_eq!(ya, yb);
    assert_eq!(ya, vec![(0, 0.0), (1, 34.0), (2, 68.0)]);
}

#[test]
fn paint_order_is_stable_by_z() {
    let items = [
        item(1.0, 1.0, 2, 0),
        item(1.0, 1.0, 0, 1),
        item(1.0, 1.0, 2, 2),
        item(1.0, 1.0, -3, 3),
    ];
    let order: Vec<usize> = place_stack(&items, &params(Direction::Vertical, ImgAlign::Center, 0.0, 0.0))
        .iter()
        .map(|p| p.index)
        .collect();
    assert_eq!(order, vec![3, 1, 0, 2]);
}

#[test]
fn horizontal_center_in_explicit_band() {
    let items = [item(50.0, 40.0, 0, 0), item(70.0, 60.0, 0, 1)];
    let placed = place_stack(&items, &params(Direction::Horizontal, ImgAlign::Center, 10.0, 100.0));

    assert_eq!(placed[0].rect, Rect::new(0.0, 30.0, 50.0, 70.0));
    assert_eq!(placed[1].rect, Rect::new(60.0, 20.0, 130.0, 80.0));
}

#[test]
fn end_alignment_uses_widest_item_without_band() {
    let items = [item(10.0, 5.0, 0, 0), item(30.0, 5.0, 0, 1)];
    let mut p = params(Direction::Vertical, ImgAlign::End, 0.0, 0.0);
    p.origin = Point::new(2.0, 3.0);
    let placed = place_stack(&items, &p);

    assert_eq!(placed[0].rect.x0, 22.0);
    assert_eq!(placed[0].rect.y0, 3.0);
    assert_eq!(placed[1].rect.x0, 2.0);
    assert_eq!(placed[1].rect.y0, 8.0);
}

#[test]
fn oversized_item_is_not_clamped() {
    let items = [item(10.0, 80.0, 0, 0)];
    let placed = place_stack(&items, &params(Direction::Horizontal, ImgAlign::Center, 0.0, 40.0));
    assert_eq!(placed[0].rect.y0, -20.0);
}
