// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::descriptor::{SHOW_DESCRIPTOR_FILENAME, load_show};
use crate::episode::build_episode;
use crate::error::GenerateError;
use crate::feed::{FEED_FILENAME, build_channel, write_feed};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::scan::scan_episode_dirs;

/// Options for feed generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// File name of the show descriptor, relative to the root
    pub descriptor_name: String,
    /// Where to write the feed (None = `feed.xml` in the episodes directory)
    pub output_path: Option<PathBuf>,
    /// Hash a missing audio file as empty content instead of skipping the episode
    pub treat_missing_audio_as_empty: bool,
    /// Order episodes by directory name instead of directory listing order
    pub sort_episodes: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            descriptor_name: SHOW_DESCRIPTOR_FILENAME.to_string(),
            output_path: None,
            treat_missing_audio_as_empty: true,
            sort_episodes: true,
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path the feed was written to
    pub output_path: PathBuf,
    /// Number of episodes included in the feed
    pub included: usize,
    /// Excluded episode directories (directory name, error message)
    pub skipped: Vec<(String, String)>,
}

/// Generate the podcast feed for the show rooted at `root`
///
/// This is the main entry point for the library. It:
/// 1. Loads the show descriptor
/// 2. Scans the episodes directory
/// 3. Builds a record per episode, skipping broken ones
/// 4. Assembles and writes the feed
///
/// Relative paths in the descriptor and options resolve against `root`.
pub fn generate_feed(
    root: &Path,
    options: &GenerateOptions,
    reporter: SharedProgressReporter,
) -> Result<GenerateResult, GenerateError> {
    let descriptor_path = root.join(&options.descriptor_name);
    reporter.report(ProgressEvent::LoadingShow {
        path: descriptor_path.clone(),
    });

    let show = load_show(&descriptor_path)?;
    let episodes_dir = root.join(&show.record.episodes_path);

    reporter.report(ProgressEvent::ShowLoaded {
        show_title: show.record.title.clone(),
        episodes_dir: episodes_dir.clone(),
    });

    let dirs = scan_episode_dirs(&episodes_dir, options.sort_episodes)?;
    let total = dirs.len();

    reporter.report(ProgressEvent::ScanCompleted {
        episode_dirs: total,
    });

    let mut episodes = Vec::with_capacity(total);
    let mut skipped = Vec::new();

    for (index, dir) in dirs.iter().enumerate() {
        match build_episode(
            &show.record,
            dir,
            options.treat_missing_audio_as_empty,
            &reporter,
        ) {
            Ok(episode) => {
                reporter.report(ProgressEvent::EpisodeAdded {
                    index,
                    total,
                    dir: dir.name.clone(),
                    episode_title: episode.title.clone(),
                    content_id: episode.content_id.clone(),
                });
                episodes.push(episode);
            }
            Err(e) => {
                reporter.report(ProgressEvent::EpisodeSkipped {
                    index,
                    total,
                    dir: dir.name.clone(),
                    reason: e.to_string(),
                });
                skipped.push((dir.name.clone(), e.to_string()));
            }
        }
    }

    let channel = build_channel(&show, &episodes);

    let output_path = match &options.output_path {
        Some(path) => root.join(path),
        None => episodes_dir.join(FEED_FILENAME),
    };
    write_feed(&channel, &output_path)?;

    reporter.report(ProgressEvent::FeedWritten {
        path: output_path.clone(),
        item_count: episodes.len(),
    });

    reporter.report(ProgressEvent::GenerationCompleted {
        included_count: episodes.len(),
        skipped_count: skipped.len(),
    });

    Ok(GenerateResult {
        output_path,
        included: episodes.len(),
        skipped,
    })
}
