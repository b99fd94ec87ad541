// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DescriptorError;

use super::frontmatter::read_document;
use super::markdown::render_markdown;

/// Default file name of the show descriptor
pub const SHOW_DESCRIPTOR_FILENAME: &str = "podcast.md";

/// Preamble keys of the show descriptor as they appear on disk
#[derive(Debug, Default, Deserialize)]
struct ShowPreamble {
    title: Option<String>,
    base_url: Option<String>,
    episodes_path: Option<String>,
    author: Option<String>,
    language: Option<String>,
    image: Option<String>,
}

/// Podcast-wide metadata declared by the show descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRecord {
    pub title: String,
    /// Prefix that episode paths are appended to verbatim
    pub base_url: String,
    /// Directory holding one subdirectory per episode
    pub episodes_path: PathBuf,
    /// Default author for episodes that don't declare one
    pub author: String,
    pub language: Option<String>,
    pub image: Option<String>,
}

/// A loaded show descriptor
#[derive(Debug, Clone)]
pub struct ShowDescriptor {
    pub record: ShowRecord,
    /// Descriptor body rendered to HTML, used as the feed description
    pub description_html: String,
}

impl ShowRecord {
    fn from_preamble(preamble: ShowPreamble, path: &Path) -> Result<Self, DescriptorError> {
        let episodes_path =
            non_empty(preamble.episodes_path).ok_or(DescriptorError::MissingField {
                path: path.to_path_buf(),
                field: "episodes_path",
            })?;

        Ok(Self {
            title: preamble.title.unwrap_or_default(),
            base_url: preamble.base_url.unwrap_or_default(),
            episodes_path: PathBuf::from(episodes_path),
            author: preamble.author.unwrap_or_default(),
            language: non_empty(preamble.language),
            image: non_empty(preamble.image),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Load the show descriptor at `path`
pub fn load_show(path: &Path) -> Result<ShowDescriptor, DescriptorError> {
    let (preamble, body): (ShowPreamble, String) = read_document(path)?;
    let record = ShowRecord::from_preamble(preamble, path)?;

    Ok(ShowDescriptor {
        record,
        description_html: render_markdown(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_SHOW: &str = "---
title: My Show
base_url: https://x.test/
episodes_path: eps
author: Alice
---
A show about *things*.
";

    fn write_show(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SHOW_DESCRIPTOR_FILENAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_show_extracts_declared_fields() {
        let (_dir, path) = write_show(SAMPLE_SHOW);
        let show = load_show(&path).unwrap();

        assert_eq!(
            show.record,
            ShowRecord {
                title: "My Show".to_string(),
                base_url: "https://x.test/".to_string(),
                episodes_path: PathBuf::from("eps"),
                author: "Alice".to_string(),
                language: None,
                image: None,
            }
        );
    }

    #[test]
    fn load_show_renders_body_as_description() {
        let (_dir, path) = write_show(SAMPLE_SHOW);
        let show = load_show(&path).unwrap();

        assert_eq!(
            show.description_html,
            "<p>A show about <em>things</em>.</p>\n"
        );
    }

    #[test]
    fn load_show_reads_optional_fields() {
        let (_dir, path) = write_show(
            "+++
title = \"My Show\"
base_url = \"https://x.test/\"
episodes_path = \"eps\"
language = \"en-us\"
image = \"https://x.test/cover.jpg\"
+++
",
        );
        let show = load_show(&path).unwrap();

        assert_eq!(show.record.author, "");
        assert_eq!(show.record.language.as_deref(), Some("en-us"));
        assert_eq!(
            show.record.image.as_deref(),
            Some("https://x.test/cover.jpg")
        );
    }

    #[test]
    fn load_show_defaults_missing_base_url_to_empty() {
        let (_dir, path) = write_show("---\ntitle: x\nepisodes_path: eps\n---\n");

        assert_eq!(load_show(&path).unwrap().record.base_url, "");
    }

    #[test]
    fn load_show_keeps_relative_base_url_verbatim() {
        let (_dir, path) = write_show("---\nbase_url: /podcast/\nepisodes_path: eps\n---\n");

        assert_eq!(load_show(&path).unwrap().record.base_url, "/podcast/");
    }

    #[test]
    fn load_show_requires_episodes_path() {
        let (_dir, path) = write_show("---\nbase_url: https://x.test/\nepisodes_path: ''\n---\n");

        assert!(matches!(
            load_show(&path).unwrap_err(),
            DescriptorError::MissingField {
                field: "episodes_path",
                ..
            }
        ));
    }

    #[test]
    fn load_show_fails_on_malformed_preamble() {
        let (_dir, path) = write_show("---\ntitle: [oops\n---\n");

        assert!(matches!(
            load_show(&path).unwrap_err(),
            DescriptorError::YamlParseFailed { .. }
        ));
    }

    #[test]
    fn read_nonexistent_returns_error() {
        let dir = tempdir().unwrap();
        let result = load_show(&dir.path().join(SHOW_DESCRIPTOR_FILENAME));

        assert!(matches!(
            result.unwrap_err(),
            DescriptorError::ReadFailed { .. }
        ));
    }
}
