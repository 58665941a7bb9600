use render_bench::blur::gaussian_blur;
use render_bench::image::io::{load_rgb_image, save_rgb_f32};
use std::path::Path;
use std::time::Instant;

const INPUT: &str = "images/rgb.png";
const OUTPUT: &str = "blurred.png";
const SIGMA: f32 = 10.0;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    env_logger::init();
    let src = load_rgb_image(Path::new(INPUT))?;

    let start = Instant::now();
    let blurred = gaussian_blur(&src, SIGMA);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    save_rgb_f32(&blurred, Path::new(OUTPUT))?;
    println!(
        "Blurred {INPUT} ({}x{}, sigma={SIGMA}) in {elapsed_ms:.1} ms, saved to {OUTPUT}",
        src.w, src.h
    );
    Ok(())
}
