// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Component, Path};

use chrono::{DateTime, Utc};

use crate::descriptor::{EPISODE_DESCRIPTOR_FILENAME, ShowRecord, load_episode_descriptor};
use crate::error::EpisodeError;
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::scan::EpisodeDir;

use super::content_id::content_id;

/// File name of the audio file inside an episode directory
pub const AUDIO_FILENAME: &str = "audio.mp3";

/// MIME type announced in every enclosure
pub const MEDIA_TYPE: &str = "audio/mp3";

/// A fully resolved feed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub title: String,
    pub author: String,
    pub pub_date: DateTime<Utc>,
    /// Hex MD5 of the audio bytes, used as the item GUID
    pub content_id: String,
    pub media_url: String,
    pub media_type: &'static str,
    /// Audio size in bytes
    pub media_length: u64,
    pub description_html: String,
}

/// Build the feed record for one episode directory
///
/// Reads `episode.md` and `audio.mp3` from `dir`. A missing descriptor is an
/// error. A missing audio file is hashed as empty content when
/// `treat_missing_audio_as_empty` is set, and is an error otherwise.
///
/// The publication date is the audio file's modification time. Without audio
/// the descriptor's modification time is used, then the current time.
pub fn build_episode(
    show: &ShowRecord,
    dir: &EpisodeDir,
    treat_missing_audio_as_empty: bool,
    reporter: &SharedProgressReporter,
) -> Result<EpisodeRecord, EpisodeError> {
    let audio_path = dir.path.join(AUDIO_FILENAME);
    let descriptor_path = dir.path.join(EPISODE_DESCRIPTOR_FILENAME);

    let descriptor = load_episode_descriptor(&descriptor_path)?;

    let audio = match std::fs::read(&audio_path) {
        Ok(bytes) => Some(bytes),
        Err(_) if treat_missing_audio_as_empty => {
            reporter.report(ProgressEvent::AudioMissing {
                dir: dir.name.clone(),
                path: audio_path.clone(),
            });
            None
        }
        Err(e) => {
            return Err(EpisodeError::AudioReadFailed {
                path: audio_path,
                source: e,
            });
        }
    };

    let audio_bytes = audio.as_deref().unwrap_or_default();

    let pub_date = audio
        .as_ref()
        .and_then(|_| modified_time(&audio_path))
        .or_else(|| modified_time(&descriptor_path))
        .unwrap_or_else(Utc::now);

    Ok(EpisodeRecord {
        title: descriptor.title.unwrap_or_else(|| dir.name.clone()),
        author: effective_author(descriptor.author.as_deref(), &show.author),
        pub_date,
        content_id: content_id(audio_bytes),
        media_url: media_url(show, &dir.name),
        media_type: MEDIA_TYPE,
        media_length: audio_bytes.len() as u64,
        description_html: descriptor.summary_html,
    })
}

/// Resolve the author of an episode, falling back to the show author
pub fn effective_author(episode_author: Option<&str>, show_author: &str) -> String {
    episode_author
        .filter(|a| !a.is_empty())
        .unwrap_or(show_author)
        .to_string()
}

/// Public URL of an episode's audio file
///
/// The base URL is used verbatim as a prefix, followed by the episodes path
/// and the directory name joined with `/`. The relative part is normalized
/// lexically: `.` is dropped and `..` cancels the segment before it.
pub fn media_url(show: &ShowRecord, dir_name: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in show.episodes_path.components() {
        match component {
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => {
                if segments.last().is_some_and(|last| last != "..") {
                    segments.pop();
                } else {
                    segments.push("..".to_string());
                }
            }
            _ => {}
        }
    }

    segments.push(dir_name.to_string());
    segments.push(AUDIO_FILENAME.to_string());

    format!("{}{}", show.base_url, segments.join("/"))
}

fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}
