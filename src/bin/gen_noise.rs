use render_bench::image::io::save_rgb_f32;
use render_bench::noise::uniform_rgb;
use std::path::Path;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;
const OUTPUT: &str = "images/noise.png";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    env_logger::init();
    let img = uniform_rgb(WIDTH, HEIGHT);
    save_rgb_f32(&img, Path::new(OUTPUT))?;
    println!("Saved {WIDTH}x{HEIGHT} noise image to {OUTPUT}");
    Ok(())
}
