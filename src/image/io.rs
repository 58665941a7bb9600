//! I/O helpers for RGB images.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into planar f32 channels in [0, 1].
//! - `save_rgb_f32`: write planar f32 channels to an 8-bit RGB PNG.
use super::RgbImageF32;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to planar f32 RGB in [0, 1].
pub fn load_rgb_image(path: &Path) -> Result<RgbImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut out = RgbImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let px = img.get_pixel(x as u32, y as u32).0;
            out.set(x, y, px.map(|c| c as f32 / 255.0));
        }
    }
    Ok(out)
}

/// Save planar f32 channels to an RGB PNG, clamping values into [0, 255].
pub fn save_rgb_f32(image: &RgbImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        for x in 0..image.w {
            let px = image.get(x, y).map(|v| (v * 255.0).clamp(0.0, 255.0) as u8);
            out.put_pixel(x as u32, y as u32, Rgb(px));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
