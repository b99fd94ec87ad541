mod content_id;
mod record;

pub use content_id::{EMPTY_CONTENT_ID, content_id};
pub use record::{
    AUDIO_FILENAME, EpisodeRecord, MEDIA_TYPE, build_episode, effective_author, media_url,
};
