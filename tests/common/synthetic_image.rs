use render_bench::image::RgbImageF32;

/// Generates a high-contrast RGB checkerboard with per-channel phase shifts,
/// so every plane is non-uniform.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = RgbImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut rgb = [0.0f32; 3];
            for (c, px) in rgb.iter_mut().enumerate() {
                let cx = (x / cell + c) as i32;
                let cy = (y / cell) as i32;
                *px = if (cx + cy) & 1 == 0 { 0.125 } else { 0.875 };
            }
            img.set(x, y, rgb);
        }
    }
    img
}

/// Constant-valued RGB image.
pub fn flat_rgb(width: usize, height: usize, value: f32) -> RgbImageF32 {
    let mut img = RgbImageF32::new(width, height);
    for plane in img.planes_mut() {
        for row in plane.rows_mut() {
            row.fill(value);
        }
    }
    img
}
