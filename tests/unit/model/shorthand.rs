use super::*;
use serde_json::json;

#[test]
fn scalar_padding_broadcasts() {
    let p: EdgeInsetSpec = serde_json::from_value(json!(7)).unwrap();
    assert_eq!(p.resolve(), Edges::new(7.0, 7.0, 7.0, 7.0));
}

#[test]
fn pair_padding_is_vertical_then_horizontal() {
    let p: EdgeInsetSpec = serde_json::from_value(json!([4, 9])).unwrap();
    assert_eq!(p.resolve(), Edges::new(4.0, 9.0, 4.0, 9.0));
}

#[test]
fn quad_padding_is_top_right_bottom_left() {
    let p: EdgeInsetSpec = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    let e = p.resolve();
    assert_eq!((e.top, e.right, e.bottom, e.left), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(e.horizontal(), 6.0);
    assert_eq!(e.vertical(), 4.0);
}

#[test]
fn three_value_padding_is_rejected() {
    assert!(serde_json::from_value::<EdgeInsetSpec>(json!([1, 2, 3])).is_err());
}

#[test]
fn scalar_radius_sets_all_corners() {
    let r: RadiusSpec = serde_json::from_value(json!(6)).unwrap();
    assert_eq!(r.resolve().as_array(), [6.0; 4]);

    let r: RadiusSpec = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    let c = r.resolve();
    assert_eq!(c.top_left, 1.0);
    assert_eq!(c.top_right, 2.0);
    assert_eq!(c.bottom_right, 3.0);
    assert_eq!(c.bottom_left, 4.0);
}

#[test]
fn size_spec_keywords_and_numbers() {
    let s: SizePair = serde_json::from_value(json!("auto")).unwrap();
    assert_eq!(s.axes(), (SizeSpec::Auto, SizeSpec::Auto));

    let s: SizePair = serde_json::from_value(json!([120, "bgImg"])).unwrap();
    assert_eq!(s.axes(), (SizeSpec::Fixed(120.0), SizeSpec::BackgroundImage));

    let s: SizeSpec = serde_json::from_value(json!("64")).unwrap();
    assert_eq!(s, SizeSpec::Fixed(64.0));
}

#[test]
fn unknown_size_keyword_resolves_to_zero() {
    let s: SizeSpec = serde_json::from_value(json!("huge")).unwrap();
    assert_eq!(s, SizeSpec::Fixed(0.0));
}

#[test]
fn length_spec_parses_pixels_and_percent() {
    assert_eq!(LengthSpec::parse("50%"), LengthSpec::Percent(50.0));
    assert_eq!(LengthSpec::parse(" 120 "), LengthSpec::Px(120.0));
    assert_eq!(LengthSpec::parse("wide"), LengthSpec::Px(0.0));
    assert_eq!(LengthSpec::parse("abc%"), LengthSpec::Px(0.0));

    assert_eq!(LengthSpec::Percent(50.0).resolve(300.0), 150.0);
    assert_eq!(LengthSpec::Px(12.0).resolve(300.0), 12.0);
}

#[test]
fn length_pair_and_position_shorthand() {
    let l: LengthPair = serde_json::from_value(json!(["25%", 40])).unwrap();
    assert_eq!(
        l.axes(),
        (LengthSpec::Percent(25.0), LengthSpec::Px(40.0))
    );

    let p: PositionSpec = serde_json::from_value(json!(5)).unwrap();
    assert_eq!(p.resolve(), Point::new(5.0, 5.0));
    let p: PositionSpec = serde_json::from_value(json!([3, 8])).unwrap();
    assert_eq!(p.resolve(), Point::new(3.0, 8.0));
}

#[test]
fn edges_expand_by_border() {
    let e = Edges::new(1.0, 2.0, 3.0, 4.0).expanded(2.0);
    assert_eq!(e, Edges::new(3.0, 4.0, 5.0, 6.0));
}
