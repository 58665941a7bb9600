pub mod io;
pub mod planes;

pub use self::planes::{PlaneF32, RgbImageF32};
