use super::*;
use crate::{
    foundation::color::Rgba8,
    layout::text::PlacedChar,
    model::{
        style::{FillSpec, GradientStop, GradientStops},
        text::{ShadowSpec, TextShadow, TextStroke},
    },
    surface::{DrawOp, LinearGradient, Paint, RecordingSurface},
};

fn line() -> Vec<PlacedLine> {
    vec![PlacedLine {
        chars: vec![
            PlacedChar { ch: 'A', x: 2.0 },
            PlacedChar { ch: 'é', x: 7.0 },
        ],
        x: 2.0,
        y: 10.0,
        width: 15.0,
    }]
}

fn glyph() -> GlyphStyle {
    GlyphStyle {
        size: 10.0,
        face: None,
    }
}

fn record(style: &FontStyle) -> Vec<DrawOp> {
    let mut s = RecordingSurface::create(20, 20).unwrap();
    paint_text(&mut s, &line(), style, &glyph()).unwrap();
    s.into_ops()
}

#[test]
fn draws_each_character_at_its_position() {
    let style = FontStyle {
        size: 10.0,
        ..Default::default()
    };
    let ops = record(&style);
    assert_eq!(
        ops,
        vec![
            DrawOp::FillText {
                text: "A".to_owned(),
                origin: Point::new(2.0, 10.0),
                size: 10.0,
                paint: Paint::Solid(Rgba8::BLACK),
            },
            DrawOp::FillText {
                text: "é".to_owned(),
                origin: Point::new(7.0, 10.0),
                size: 10.0,
                paint: Paint::Solid(Rgba8::BLACK),
            },
        ]
    );
}

#[test]
fn stroke_follows_fill_when_border_width_set() {
    let style = FontStyle {
        size: 10.0,
        border: TextStroke {
            color: Rgba8::WHITE,
            width: 1.5,
        },
        ..Default::default()
    };
    let ops = record(&style);
    assert_eq!(ops.len(), 4);
    assert!(matches!(ops[0], DrawOp::FillText { .. }));
    assert_eq!(
        ops[1],
        DrawOp::StrokeText {
            text: "A".to_owned(),
            origin: Point::new(2.0, 10.0),
            size: 10.0,
            stroke: StrokeStyle {
                width: 1.5,
                color: Rgba8::WHITE,
            },
        }
    );
}

#[test]
fn gradient_restarts_per_character() {
    let stops = GradientStops::new(vec![
        GradientStop {
            offset: 0.0,
            color: Rgba8::WHITE,
        },
        GradientStop {
            offset: 1.0,
            color: Rgba8::BLACK,
        },
    ]);
    let style = FontStyle {
        size: 10.0,
        color: FillSpec::Gradient(stops.clone()),
        ..Default::default()
    };
    let ops = record(&style);
    let paints: Vec<&Paint> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { paint, .. } => Some(paint),
            _ => None,
        })
        .collect();
    assert_eq!(
        paints[1],
        &Paint::Linear(LinearGradient {
            start: Point::new(7.0, 5.0),
            end: Point::new(7.0, 15.0),
            stops: stops.stops().to_vec(),
        })
    );
}

#[test]
fn each_shadow_gets_its_own_bracketed_pass() {
    let style = FontStyle {
        size: 10.0,
        shadow: Some(ShadowSpec::Many(vec![
            TextShadow {
                color: Rgba8::BLACK,
                blur: 2.0,
                offset_x: 1.0,
                offset_y: 1.0,
            },
            TextShadow {
                color: Rgba8::WHITE,
                blur: 0.0,
                offset_x: -1.0,
                offset_y: 0.0,
            },
        ])),
        ..Default::default()
    };
    let ops = record(&style);
    // main pass (2) + 2 * (push + 2 chars + pop)
    assert_eq!(ops.len(), 10);
    assert_eq!(
        ops[2],
        DrawOp::PushShadow(Shadow {
            color: Rgba8::BLACK,
            blur: 2.0,
            offset: Vec2::new(1.0, 1.0),
        })
    );
    assert_eq!(ops[5], DrawOp::PopShadow);
    assert!(matches!(ops[6], DrawOp::PushShadow(s) if s.color == Rgba8::WHITE));
    assert_eq!(ops[9], DrawOp::PopShadow);
}
