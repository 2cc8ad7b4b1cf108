use super::*;
use crate::{
    layout::text::{CharClassAdvance, measure_lines},
    model::{
        image::Direction,
        shorthand::SizePair,
        text::TextContent,
    },
};

fn text_opts(lines: Vec<&str>, size: f64) -> TextGraphicsOptions {
    let mut opts = TextGraphicsOptions {
        content: Some(TextContent::from(lines)),
        ..Default::default()
    };
    opts.font_style.size = size;
    opts
}

fn measured(opts: &TextGraphicsOptions) -> Vec<MeasuredLine> {
    measure_lines(&opts.lines(), opts.font_style.size, &mut CharClassAdvance)
}

#[test]
fn insets_add_border_width_to_every_side() {
    let e = resolve_insets(EdgeInsetSpec::Pair([4.0, 9.0]), 2.0);
    assert_eq!(e, Edges::new(6.0, 11.0, 6.0, 11.0));
}

#[test]
fn fudge_depends_on_row_parity() {
    assert_eq!(text_block_height(0, 10.0, 3.0), 0.0);
    assert_eq!(text_block_height(1, 10.0, 3.0), 6.0);
    assert_eq!(text_block_height(2, 10.0, 3.0), 21.0);
    assert_eq!(text_block_height(3, 10.0, 3.0), 32.0);
}

#[test]
fn auto_width_of_ascii_line() {
    let mut opts = text_opts(vec!["hello"], 20.0);
    opts.padding = EdgeInsetSpec::Quad([0.0, 7.0, 0.0, 3.0]);
    let g = resolve_text_geometry(&opts, &measured(&opts), None);
    assert_eq!(g.frame.width, 5.0 * 0.5 * 20.0 + 10.0);
    assert_eq!(g.frame.height, 20.0 - AUTO_HEIGHT_FUDGE_ODD_ROWS);
    assert_eq!(g.text_top, 0.0);
}

#[test]
fn auto_width_adds_letter_spacing_of_widest_line() {
    let mut opts = text_opts(vec!["ab", "abcd"], 10.0);
    opts.font_style.letter_spacing = 2.0;
    let g = resolve_text_geometry(&opts, &measured(&opts), None);
    assert_eq!(g.frame.width, 20.0 + 6.0);
}

#[test]
fn no_lines_means_empty_box() {
    let opts = text_opts(vec!["", ""], 10.0);
    let g = resolve_text_geometry(&opts, &measured(&opts), None);
    assert!(g.frame.is_empty());
    assert_eq!(g.frame.surface_size(), (0, 0));
}

#[test]
fn vertical_align_against_fixed_height() {
    let mut opts = text_opts(vec!["a", "b"], 10.0);
    opts.padding = EdgeInsetSpec::Uniform(5.0);
    opts.size = SizePair::Each([SizeSpec::Auto, SizeSpec::Fixed(60.0)]);
    let lines = measured(&opts);
    // text height = 2 * 10 - 2
    opts.align = VerticalAlign::Top;
    assert_eq!(resolve_text_geometry(&opts, &lines, None).text_top, 5.0);
    opts.align = VerticalAlign::Center;
    assert_eq!(resolve_text_geometry(&opts, &lines, None).text_top, 21.0);
    opts.align = VerticalAlign::Bottom;
    assert_eq!(resolve_text_geometry(&opts, &lines, None).text_top, 37.0);
}

#[test]
fn bg_img_size_uses_natural_dimensions() {
    let mut opts = text_opts(vec!["a"], 10.0);
    opts.size = SizePair::Both(SizeSpec::BackgroundImage);
    let lines = measured(&opts);
    let g = resolve_text_geometry(&opts, &lines, Some((120, 45)));
    assert_eq!((g.frame.width, g.frame.height), (120.0, 45.0));

    let g = resolve_text_geometry(&opts, &lines, None);
    assert!(g.frame.is_empty());
}

#[test]
fn negative_fixed_size_clamps_to_zero() {
    let mut opts = text_opts(vec!["a"], 10.0);
    opts.size = SizePair::Each([SizeSpec::Fixed(-5.0), SizeSpec::Fixed(10.0)]);
    let g = resolve_text_geometry(&opts, &measured(&opts), None);
    assert_eq!(g.frame.width, 0.0);
    assert!(g.frame.is_empty());
}

#[test]
fn image_auto_size_adds_gap_on_main_axis_only() {
    let items = [
        StackItem { width: 50.0, height: 40.0, z_index: 0, index: 0 },
        StackItem { width: 70.0, height: 60.0, z_index: 0, index: 1 },
    ];
    let opts = ImageGraphicsOptions {
        direction: Direction::Horizontal,
        gap: 10.0,
        padding: EdgeInsetSpec::Pair([2.0, 3.0]),
        ..Default::default()
    };
    let g = resolve_image_geometry(&opts, &items, None);
    assert_eq!(g.width, 130.0 + 6.0);
    assert_eq!(g.height, 60.0 + 4.0);
    assert_eq!(g.content_width(), 130.0);
    assert_eq!(g.content_height(), 60.0);
}

#[test]
fn image_strip_without_items_is_empty() {
    let g = resolve_image_geometry(&ImageGraphicsOptions::default(), &[], None);
    assert!(g.is_empty());
}
