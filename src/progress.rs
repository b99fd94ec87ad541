// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted during feed generation for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The show descriptor is being read
    LoadingShow { path: PathBuf },

    /// The show descriptor was parsed successfully
    ShowLoaded {
        show_title: String,
        episodes_dir: PathBuf,
    },

    /// The episodes directory was listed
    ScanCompleted { episode_dirs: usize },

    /// An episode has no readable audio file and is hashed as empty
    AudioMissing { dir: String, path: PathBuf },

    /// An episode was appended to the feed
    EpisodeAdded {
        /// Position of the directory in the scan
        index: usize,
        /// Number of directories found by the scan
        total: usize,
        dir: String,
        episode_title: String,
        content_id: String,
    },

    /// An episode directory was excluded from the feed
    EpisodeSkipped {
        index: usize,
        total: usize,
        dir: String,
        reason: String,
    },

    /// The feed document was written to disk
    FeedWritten { path: PathBuf, item_count: usize },

    /// Generation finished
    GenerationCompleted {
        included_count: usize,
        skipped_count: usize,
    },
}

/// Trait for reporting progress events during feed generation.
///
/// This is the only diagnostic channel of the library. Implementations can
/// render progress bars, forward to a logger, or collect events in tests.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

/// Forwards every event to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    /// Create a new LogReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

impl ProgressReporter for LogReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::LoadingShow { path } => {
                log::debug!("loading show descriptor {}", path.display());
            }
            ProgressEvent::ShowLoaded {
                show_title,
                episodes_dir,
            } => {
                log::info!(
                    "show '{}' loaded, scanning {}",
                    show_title,
                    episodes_dir.display()
                );
            }
            ProgressEvent::ScanCompleted { episode_dirs } => {
                log::info!("found {} episode directories", episode_dirs);
            }
            ProgressEvent::AudioMissing { dir, path } => {
                log::warn!(
                    "episode '{}' has no readable audio at {}, hashing empty content",
                    dir,
                    path.display()
                );
            }
            ProgressEvent::EpisodeAdded {
                index,
                total,
                dir,
                episode_title,
                content_id,
            } => {
                log::info!(
                    "[{}/{}] added '{}' from {} (guid {})",
                    index + 1,
                    total,
                    episode_title,
                    dir,
                    content_id
                );
            }
            ProgressEvent::EpisodeSkipped {
                index,
                total,
                dir,
                reason,
            } => {
                log::warn!("[{}/{}] skipped {}: {}", index + 1, total, dir, reason);
            }
            ProgressEvent::FeedWritten { path, item_count } => {
                log::info!("feed with {} items written to {}", item_count, path.display());
            }
            ProgressEvent::GenerationCompleted {
                included_count,
                skipped_count,
            } => {
                log::info!(
                    "generation complete: {} included, {} skipped",
                    included_count,
                    skipped_count
                );
            }
        }
    }
}
