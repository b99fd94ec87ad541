use std::path::Path;

use serde::Deserialize;

use crate::error::DescriptorError;

use super::frontmatter::read_document;
use super::markdown::render_markdown;

/// File name of the per-episode descriptor
pub const EPISODE_DESCRIPTOR_FILENAME: &str = "episode.md";

#[derive(Debug, Default, Deserialize)]
struct EpisodePreamble {
    title: Option<String>,
    author: Option<String>,
}

/// Metadata declared by an episode descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeDescriptor {
    pub title: Option<String>,
    /// Episode author; blank values are normalized to `None`
    pub author: Option<String>,
    /// Descriptor body rendered to HTML
    pub summary_html: String,
}

/// Load an episode descriptor from `path`
pub fn load_episode_descriptor(path: &Path) -> Result<EpisodeDescriptor, DescriptorError> {
    let (preamble, body): (EpisodePreamble, String) = read_document(path)?;

    Ok(EpisodeDescriptor {
        title: preamble.title,
        author: preamble.author.filter(|a| !a.trim().is_empty()),
        summary_html: render_markdown(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_episode_descriptor_extracts_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(EPISODE_DESCRIPTOR_FILENAME);
        std::fs::write(&path, "---\ntitle: Ep1\nauthor: Bob\n---\nNotes for **Ep1**\n").unwrap();

        let episode = load_episode_descriptor(&path).unwrap();

        assert_eq!(episode.title.as_deref(), Some("Ep1"));
        assert_eq!(episode.author.as_deref(), Some("Bob"));
        assert_eq!(
            episode.summary_html,
            "<p>Notes for <strong>Ep1</strong></p>\n"
        );
    }

    #[test]
    fn blank_author_is_treated_as_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(EPISODE_DESCRIPTOR_FILENAME);
        std::fs::write(&path, "---\ntitle: Ep1\nauthor: \"  \"\n---\n").unwrap();

        let episode = load_episode_descriptor(&path).unwrap();

        assert!(episode.author.is_none());
    }

    #[test]
    fn read_nonexistent_returns_error() {
        let dir = tempdir().unwrap();
        let result = load_episode_descriptor(&dir.path().join(EPISODE_DESCRIPTOR_FILENAME));

        assert!(result.is_err());
    }
}
