mod satellite_image;

pub use satellite_image::*;
