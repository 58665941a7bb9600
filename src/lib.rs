#![doc = include_str!("../README.md")]

pub mod blur;
pub mod image;
pub mod noise;
pub mod series;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points used by the binaries.
pub use crate::blur::{gaussian_blur, GaussianKernel, SeparableFilter};
pub use crate::image::{PlaneF32, RgbImageF32};
pub use crate::series::MeasurementSet;
pub use crate::stats::{welch_t_test, WelchTTest};

/// Small prelude for quick experiments.
///
/// ```
/// use render_bench::prelude::*;
///
/// let noise = uniform_rgb(64, 64);
/// let smooth = gaussian_blur(&noise, 2.0);
/// assert_eq!((smooth.w, smooth.h), (64, 64));
/// ```
pub mod prelude {
    pub use crate::blur::gaussian_blur;
    pub use crate::image::RgbImageF32;
    pub use crate::noise::uniform_rgb;
    pub use crate::stats::{welch_t_test, WelchTTest};
}
