mod fs_image_store;
mod unimplemented_fetcher;

pub use fs_image_store::*;
pub use unimplemented_fetcher::*;
