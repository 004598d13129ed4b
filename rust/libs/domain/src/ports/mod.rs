mod image_fetcher;
mod image_store;

pub use image_fetcher::*;
pub use image_store::*;
