mod episode;
mod frontmatter;
mod markdown;
mod show;

pub use episode::{EPISODE_DESCRIPTOR_FILENAME, EpisodeDescriptor, load_episode_descriptor};
pub use frontmatter::{Preamble, PreambleFormat, Split, parse_document, read_document, split_preamble};
pub use markdown::render_markdown;
pub use show::{SHOW_DESCRIPTOR_FILENAME, ShowDescriptor, ShowRecord, load_show};
