//! Uniform noise image synthesis for benchmark inputs.

use crate::image::RgbImageF32;
use rand::Rng;

/// Generate a `width × height` RGB image of independent uniform samples in
/// [0, 1) from the thread-local RNG. Content differs between calls.
pub fn uniform_rgb(width: usize, height: usize) -> RgbImageF32 {
    uniform_rgb_with(width, height, &mut rand::thread_rng())
}

/// Deterministic variant taking the RNG explicitly.
pub fn uniform_rgb_with<R: Rng>(width: usize, height: usize, rng: &mut R) -> RgbImageF32 {
    let mut img = RgbImageF32::new(width, height);
    for plane in img.planes_mut() {
        for row in plane.rows_mut() {
            for px in row {
                *px = rng.gen();
            }
        }
    }
    img
}
