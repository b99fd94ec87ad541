pub mod descriptor;
pub mod episode;
pub mod error;
pub mod feed;
pub mod generate;
pub mod progress;
pub mod scan;

// Re-export main types for convenience
pub use descriptor::{EpisodeDescriptor, ShowDescriptor, ShowRecord, load_show, render_markdown};
pub use episode::{EpisodeRecord, build_episode, content_id, effective_author};
pub use error::{DescriptorError, EpisodeError, FeedError, GenerateError, ScanError};
pub use feed::{build_channel, write_feed};
pub use generate::{GenerateOptions, GenerateResult, generate_feed};
pub use progress::{
    LogReporter, NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter,
};
pub use scan::{EpisodeDir, scan_episode_dirs};
