mod coordinate;
mod image;
mod sample;

pub use coordinate::*;
pub use image::*;
pub use sample::*;
