use super::*;
use crate::image::RasterImage;

fn solid_rgb(w: usize, h: usize, rgb: [u8; 3]) -> RasterImage {
    let data = (0..w * h).flat_map(|_| rgb).collect();
    RasterImage::from_u8(w, h, 3, data).unwrap()
}

#[test]
fn mixed_pixel_matches_hand_computed_levels() {
    let img = solid_rgb(1, 1, [200, 50, 10]);
    assert_eq!(convert(&img, LUMA).unwrap().get(0, 0), 91);
    assert_eq!(convert(&img, STANDARD).unwrap().get(0, 0), 79);
}

#[test]
fn ceiling_rounds_fractional_levels_up() {
    // 0.2125 * 1 = 0.2125 -> 1, not 0
    let img = solid_rgb(1, 1, [1, 0, 0]);
    assert_eq!(convert(&img, STANDARD).unwrap().get(0, 0), 1);
}

#[test]
fn overweighted_coefficients_clamp_at_255() {
    let heavy = Coefficients::new(1.0, 1.0, 1.0).unwrap();
    let img = solid_rgb(2, 2, [200, 200, 200]);
    let gray = convert(&img, heavy).unwrap();
    assert!(gray.as_raw().iter().all(|&v| v == 255));
}

#[test]
fn alpha_channel_does_not_affect_output() {
    let opaque = RasterImage::from_u8(1, 1, 4, vec![200, 50, 10, 255]).unwrap();
    let clear = RasterImage::from_u8(1, 1, 4, vec![200, 50, 10, 0]).unwrap();
    assert_eq!(
        convert(&opaque, LUMA).unwrap(),
        convert(&clear, LUMA).unwrap()
    );
}

#[test]
fn float_domain_matches_byte_domain() {
    let bytes = solid_rgb(1, 1, [255, 0, 255]);
    let floats = RasterImage::from_f32(1, 1, 3, vec![1.0, 0.0, 1.0]).unwrap();
    for set in [CoefficientSet::Luma, CoefficientSet::Standard] {
        assert_eq!(
            convert_with(&bytes, set).unwrap(),
            convert_with(&floats, set).unwrap()
        );
    }
}

#[test]
fn grayscale_input_is_rejected() {
    let gray = RasterImage::from_u8(2, 1, 1, vec![10, 20]).unwrap();
    let err = convert(&gray, LUMA).unwrap_err();
    assert!(matches!(err, Error::AlreadyGrayscale { channels: 1 }));
}

#[test]
fn negative_weights_are_rejected() {
    assert!(Coefficients::new(-0.1, 0.6, 0.5).is_err());
    assert!(Coefficients::new(f64::NAN, 0.6, 0.5).is_err());
}

#[test]
fn predefined_sets_sum_to_one() {
    assert!((LUMA.sum() - 1.0).abs() < 1e-9);
    assert!((STANDARD.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn luma_toggle_selects_set() {
    assert_eq!(CoefficientSet::from_luma_toggle(true), CoefficientSet::Luma);
    assert_eq!(CoefficientSet::from_luma_toggle(false), CoefficientSet::Standard);
    assert_eq!(CoefficientSet::Luma.label(), "Luma");
}
