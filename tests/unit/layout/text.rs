use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn measure(lines: &[&str], size: f64) -> Vec<MeasuredLine> {
    measure_lines(lines, size, &mut CharClassAdvance)
}

fn params(content_width: f64, align: TextAlign) -> TextBlockParams {
    TextBlockParams {
        origin: Point::new(0.0, 0.0),
        content_width,
        font_size: 10.0,
        row_gap: 0.0,
        letter_spacing: 0.0,
        align,
    }
}

#[test]
fn char_width_class_splits_at_ascii() {
    assert_eq!(char_width_class('A'), 0.5);
    assert_eq!(char_width_class('\u{7f}'), 0.5);
    assert_eq!(char_width_class('é'), 1.0);
    assert_eq!(char_width_class('中'), 1.0);
}

#[test]
fn line_width_includes_letter_spacing_between_chars() {
    let lines = measure(&["abcd", "中文"], 20.0);
    assert_eq!(lines[0].visual_width(), 40.0);
    assert_eq!(lines[0].width(3.0), 40.0 + 3.0 * 3.0);
    assert_eq!(lines[1].visual_width(), 40.0);
    assert_eq!(lines[1].char_count(), 2);
}

#[test]
fn widest_line_tie_prefers_later_line() {
    let lines = measure(&["abcd", "中文", "ab"], 10.0);
    let widest = widest_line(&lines).unwrap();
    assert_eq!(widest.text, "中文");
    assert!(widest_line(&[]).is_none());
}

#[test]
fn centered_lines_share_the_widest_extent() {
    let lines = measure(&["AB", "CDEF"], 10.0);
    let placed = layout_text_block(&lines, &params(0.0, TextAlign::Center));

    assert_eq!(placed[0].width, 10.0);
    assert_eq!(placed[1].width, 20.0);
    assert!(approx_eq(placed[0].x, 5.0));
    assert!(approx_eq(placed[1].x, 0.0));
    assert!(approx_eq(placed[0].chars[1].x, 10.0));
}

#[test]
fn rows_are_spaced_by_size_and_gap() {
    let lines = measure(&["a", "b", "c"], 10.0);
    let mut p = params(0.0, TextAlign::Left);
    p.origin = Point::new(3.0, 7.0);
    p.row_gap = 4.0;
    let placed = layout_text_block(&lines, &p);

    let ys: Vec<f64> = placed.iter().map(|l| l.y).collect();
    assert_eq!(ys, vec![12.0, 26.0, 40.0]);
    assert!(placed.iter().all(|l| approx_eq(l.x, 3.0)));
}

#[test]
fn right_align_against_content_width() {
    let lines = measure(&["ab"], 10.0);
    let mut p = params(50.0, TextAlign::Right);
    p.letter_spacing = 2.0;
    let placed = layout_text_block(&lines, &p);

    // width = 10 + 2
    assert!(approx_eq(placed[0].x, 38.0));
    let xs: Vec<f64> = placed[0].chars.iter().map(|c| c.x).collect();
    assert_eq!(xs, vec![38.0, 45.0]);
}

#[test]
fn measurement_mode_parses_cli_names() {
    assert_eq!(
        "font-advance".parse::<TextMeasurement>().unwrap(),
        TextMeasurement::FontAdvance
    );
    assert_eq!(
        "char-class".parse::<TextMeasurement>().unwrap(),
        TextMeasurement::CharClass
    );
    assert!("glyph".parse::<TextMeasurement>().is_err());
}
