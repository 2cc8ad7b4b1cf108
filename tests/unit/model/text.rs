use super::*;
use crate::model::shorthand::SizeSpec;
use serde_json::json;

#[test]
fn defaults_match_documented_values() {
    let opts: TextGraphicsOptions = serde_json::from_value(json!({})).unwrap();
    assert!(opts.lines().is_empty());
    assert_eq!(opts.font_style.size, 12.0);
    assert_eq!(opts.font_style.text_align, TextAlign::Center);
    assert_eq!(opts.font_style.color, FillSpec::Solid(Rgba8::BLACK));
    assert_eq!(opts.font_style.border.width, 0.0);
    assert_eq!(opts.align, VerticalAlign::Center);
    assert_eq!(opts.size.axes(), (SizeSpec::Auto, SizeSpec::Auto));
    assert!(opts.font_style.shadows().is_empty());
}

#[test]
fn content_filters_empty_lines() {
    let opts: TextGraphicsOptions =
        serde_json::from_value(json!({"content": ["a", "", "bc", ""]})).unwrap();
    assert_eq!(opts.lines(), vec!["a", "bc"]);

    let opts: TextGraphicsOptions = serde_json::from_value(json!({"content": ""})).unwrap();
    assert!(opts.lines().is_empty());
}

#[test]
fn camel_case_font_style_keys() {
    let opts: TextGraphicsOptions = serde_json::from_value(json!({
        "content": "hi",
        "fontStyle": {
            "size": 20,
            "letterSpacing": 2,
            "rowGap": 4,
            "textAlign": "right",
            "border": {"color": "#f00", "width": 1},
            "shadow": {"color": "#0008", "blur": 3, "offsetX": 1, "offsetY": 2}
        },
        "size": [200, "auto"],
        "align": "bottom"
    }))
    .unwrap();

    let fs = &opts.font_style;
    assert_eq!(fs.size, 20.0);
    assert_eq!(fs.letter_spacing, 2.0);
    assert_eq!(fs.row_gap, 4.0);
    assert_eq!(fs.text_align, TextAlign::Right);
    assert_eq!(fs.border.color, Rgba8::new(255, 0, 0, 255));
    assert_eq!(fs.shadows().len(), 1);
    assert_eq!(fs.shadows()[0].offset_y, 2.0);
    assert_eq!(fs.shadows()[0].color, Rgba8::new(0, 0, 0, 0x88));
    assert_eq!(opts.align, VerticalAlign::Bottom);
    assert_eq!(opts.size.axes(), (SizeSpec::Fixed(200.0), SizeSpec::Auto));
}

#[test]
fn shadow_list_is_accepted() {
    let fs: FontStyle = serde_json::from_value(json!({
        "shadow": [{"offsetX": 1}, {"offsetX": 2, "blur": 4}]
    }))
    .unwrap();
    let xs: Vec<f64> = fs.shadows().iter().map(|s| s.offset_x).collect();
    assert_eq!(xs, vec![1.0, 2.0]);
    assert_eq!(fs.shadows()[0].color, Rgba8::BLACK);
}
