mod build;
mod write;

pub use build::{GENERATOR, build_channel};
pub use write::{FEED_FILENAME, write_feed};
