use super::*;
use serde_json::json;

#[test]
fn parses_css_hex_forms() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::new(255, 0, 0, 255));

    let c: Rgba8 = serde_json::from_value(json!("#000")).unwrap();
    assert_eq!(c, Rgba8::BLACK);

    let c: Rgba8 = serde_json::from_value(json!("#ffffff00")).unwrap();
    assert_eq!(c, Rgba8::new(255, 255, 255, 0));
}

#[test]
fn parses_named_and_functional_colors() {
    assert_eq!(Rgba8::parse("white").unwrap(), Rgba8::new(255, 255, 255, 255));
    assert_eq!(
        Rgba8::parse("rgb(0, 128, 255)").unwrap(),
        Rgba8::new(0, 128, 255, 255)
    );
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::new(255, 0, 0, 255));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.5])).unwrap();
    assert_eq!(c, Rgba8::new(0, 0, 255, 128));
}

#[test]
fn parses_hsla_object() {
    let c: Rgba8 = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Rgba8::new(255, 0, 0, 255));
}

#[test]
fn rejects_garbage() {
    assert!(Rgba8::parse("not-a-color").is_err());
    assert!(serde_json::from_value::<Rgba8>(json!([1.0, 2.0])).is_err());
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Rgba8::new(200, 100, 50, 128).to_premul(), [100, 50, 25, 128]);
    assert_eq!(Rgba8::new(10, 20, 30, 255).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::new(10, 20, 30, 0).to_premul(), [0, 0, 0, 0]);
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(v, json!("#01020304"));
}
