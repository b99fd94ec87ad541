use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// A candidate episode directory found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeDir {
    /// Directory name, used in the media URL
    pub name: String,
    /// Full path to the directory
    pub path: PathBuf,
}

/// List the immediate subdirectories of the episodes directory
///
/// Regular files and symlinks are ignored. With `sort` the result is ordered
/// lexicographically by name, otherwise it keeps the order the operating
/// system lists entries in.
pub fn scan_episode_dirs(episodes_dir: &Path, sort: bool) -> Result<Vec<EpisodeDir>, ScanError> {
    let entries = std::fs::read_dir(episodes_dir).map_err(|e| ScanError::ReadDirectoryFailed {
        path: episodes_dir.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDirectoryFailed {
            path: episodes_dir.to_path_buf(),
            source: e,
        })?;

        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if !is_dir {
            continue;
        }

        dirs.push(EpisodeDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    if sort {
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(dirs: &[EpisodeDir]) -> Vec<&str> {
        dirs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn scan_empty_dir_returns_nothing() {
        let dir = tempdir().unwrap();
        let dirs = scan_episode_dirs(dir.path(), true).unwrap();

        assert!(dirs.is_empty());
    }

    #[test]
    fn scan_yields_only_directories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("e1")).unwrap();
        std::fs::write(dir.path().join("feed.xml"), b"<rss/>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let dirs = scan_episode_dirs(dir.path(), true).unwrap();

        assert_eq!(names(&dirs), vec!["e1"]);
        assert_eq!(dirs[0].path, dir.path().join("e1"));
    }

    #[test]
    fn scan_sorts_lexicographically() {
        let dir = tempdir().unwrap();
        for name in ["e3", "e10", "e1", "e2"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }

        let dirs = scan_episode_dirs(dir.path(), true).unwrap();

        assert_eq!(names(&dirs), vec!["e1", "e10", "e2", "e3"]);
    }

    #[test]
    fn scan_unsorted_returns_every_directory() {
        let dir = tempdir().unwrap();
        for name in ["b", "a", "c"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }

        let mut found: Vec<String> = scan_episode_dirs(dir.path(), false)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        found.sort();

        assert_eq!(found, vec!["a", "b", "c"]);
    }

    #[test]
    fn scan_missing_dir_returns_error() {
        let dir = tempdir().unwrap();
        let result = scan_episode_dirs(&dir.path().join("nope"), true);

        match result.unwrap_err() {
            ScanError::ReadDirectoryFailed { path, .. } => {
                assert_eq!(path, dir.path().join("nope"))
            }
        }
    }
}
