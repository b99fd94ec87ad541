// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or parsing a descriptor file
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Failed to read descriptor {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preamble in {path} is never closed (expected a closing '{delimiter}' line)")]
    UnterminatedPreamble {
        path: PathBuf,
        delimiter: &'static str,
    },

    #[error("Failed to parse YAML preamble in {path}: {source}")]
    YamlParseFailed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML preamble in {path}: {source}")]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON preamble in {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Descriptor {path} is missing required field '{field}'")]
    MissingField { path: PathBuf, field: &'static str },
}

/// Errors that can occur when scanning the episodes directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that exclude a single episode from the feed
///
/// These never abort a run; the episode is reported and skipped.
#[derive(Error, Debug)]
pub enum EpisodeError {
    #[error("Failed to read audio file {path}: {source}")]
    AudioReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid episode descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
}

/// Errors that can occur when writing the generated feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to create feed file {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write feed to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: rss::Error,
    },

    #[error("Failed to flush feed file {path}: {source}")]
    FlushFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors for feed generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Show descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}
