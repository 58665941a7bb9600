mod common;

use common::synthetic_image::{checkerboard_rgb, flat_rgb};
use render_bench::blur::gaussian_blur;
use render_bench::image::PlaneF32;

fn plane_variance(plane: &PlaneF32) -> f64 {
    let n = plane.data.len() as f64;
    let mean = plane.data.iter().map(|&v| v as f64).sum::<f64>() / n;
    plane
        .data
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

#[test]
fn blur_preserves_dimensions() {
    let src = checkerboard_rgb(96, 64, 8);
    let blurred = gaussian_blur(&src, 3.0);
    assert_eq!((blurred.w, blurred.h), (src.w, src.h));
}

#[test]
fn blur_strictly_reduces_contrast_of_a_checkerboard() {
    let src = checkerboard_rgb(64, 64, 8);
    let blurred = gaussian_blur(&src, 3.0);
    for (c, (before, after)) in src.planes().iter().zip(blurred.planes()).enumerate() {
        let (vb, va) = (plane_variance(before), plane_variance(after));
        assert!(
            va < vb * 0.9,
            "channel {c}: variance {vb:.5} -> {va:.5}, expected a clear reduction"
        );
        assert!(va > 0.0, "channel {c} collapsed to a constant");
    }
}

#[test]
fn heavier_smoothing_removes_more_detail() {
    let src = checkerboard_rgb(64, 64, 4);
    let light = gaussian_blur(&src, 1.0);
    let heavy = gaussian_blur(&src, 10.0);
    let vl = plane_variance(&light.planes()[0]);
    let vh = plane_variance(&heavy.planes()[0]);
    assert!(vh < vl, "sigma 10 ({vh:.6}) should smooth more than sigma 1 ({vl:.6})");
}

#[test]
fn zero_sigma_is_the_identity() {
    let src = checkerboard_rgb(32, 32, 4);
    let out = gaussian_blur(&src, 0.0);
    assert_eq!(out, src);
}

#[test]
fn flat_input_stays_flat() {
    let src = flat_rgb(48, 48, 0.6);
    let blurred = gaussian_blur(&src, 10.0);
    for plane in blurred.planes() {
        for &px in &plane.data {
            assert!((px - 0.6).abs() < 1e-4, "flat image drifted to {px}");
        }
    }
}

#[test]
fn output_stays_within_the_input_range() {
    let src = checkerboard_rgb(40, 40, 5);
    let blurred = gaussian_blur(&src, 4.0);
    for plane in blurred.planes() {
        for &px in &plane.data {
            assert!(
                (0.1249..=0.8751).contains(&px),
                "blur produced out-of-range value {px}"
            );
        }
    }
}
