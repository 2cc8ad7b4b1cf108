use super::*;

#[test]
fn blur_params_follow_css_sigma() {
    assert_eq!(blur_params(0.0), (0, 0.0));
    assert_eq!(blur_params(-1.0), (0, 0.0));
    assert_eq!(blur_params(4.0), (6, 2.0));
    assert_eq!(blur_params(3.0), (5, 1.5));
}

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = blur_rgba8_premul(&src, 1, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_rejects_mismatched_buffer() {
    assert!(blur_rgba8_premul(&[0u8; 7], 1, 2, 1, 1.0).is_err());
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 2, 1.2).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 6);
}

#[test]
fn tint_keeps_coverage_and_replaces_color() {
    let src = [10u8, 20, 30, 255, 0, 0, 0, 0, 5, 5, 5, 128];
    let out = tint_coverage(&src, Rgba8::new(255, 0, 0, 255));
    assert_eq!(&out[0..4], &[255, 0, 0, 255]);
    assert_eq!(&out[4..8], &[0, 0, 0, 0]);
    assert_eq!(&out[8..12], &[128, 0, 0, 128]);

    let half = tint_coverage(&src[0..4], Rgba8::new(0, 0, 255, 128));
    assert_eq!(half, vec![0, 0, 128, 128]);
}
