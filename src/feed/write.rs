// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rss::Channel;

use crate::error::FeedError;

/// Default file name of the generated feed, placed in the episodes directory
pub const FEED_FILENAME: &str = "feed.xml";

/// Serialize a channel to `path` as indented XML
///
/// The file is created or truncated first; a failed write can leave a
/// partial document behind.
pub fn write_feed(channel: &Channel, path: &Path) -> Result<(), FeedError> {
    let file = File::create(path).map_err(|e| FeedError::CreateFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = channel
        .pretty_write_to(BufWriter::new(file), b' ', 2)
        .map_err(|e| FeedError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| FeedError::FlushFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
