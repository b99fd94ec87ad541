// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::DescriptorError;

/// Serialization format of a descriptor preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleFormat {
    Yaml,
    Toml,
    Json,
}

struct Delimiters {
    open: &'static str,
    close: &'static str,
    format: PreambleFormat,
}

static DELIMITERS: [Delimiters; 6] = [
    Delimiters {
        open: "---",
        close: "---",
        format: PreambleFormat::Yaml,
    },
    Delimiters {
        open: "---yaml",
        close: "---",
        format: PreambleFormat::Yaml,
    },
    Delimiters {
        open: "+++",
        close: "+++",
        format: PreambleFormat::Toml,
    },
    Delimiters {
        open: "---toml",
        close: "---",
        format: PreambleFormat::Toml,
    },
    Delimiters {
        open: ";;;",
        close: ";;;",
        format: PreambleFormat::Json,
    },
    Delimiters {
        open: "---json",
        close: "---",
        format: PreambleFormat::Json,
    },
];

/// Structured header found at the top of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble<'a> {
    pub format: PreambleFormat,
    /// Raw text between the delimiter lines
    pub content: &'a str,
}

/// A descriptor split into its preamble and markdown body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub preamble: Option<Preamble<'a>>,
    pub body: &'a str,
}

/// Split descriptor text into preamble and body
///
/// The preamble must open on the first non-blank line. Text without an
/// opening delimiter is all body. On an unclosed preamble the expected
/// closing delimiter is returned as the error.
///
/// A leading `---` is always taken as an opening delimiter, so a body that
/// starts with a markdown thematic break and has no preamble is rejected.
/// Such files need an empty `---`/`---` preamble in front.
pub fn split_preamble(content: &str) -> Result<Split<'_>, &'static str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let no_preamble = Split {
        preamble: None,
        body: content,
    };

    let mut lines = content.split_inclusive('\n');
    let mut offset = 0;

    let opening = loop {
        match lines.next() {
            None => return Ok(no_preamble),
            Some(line) if line.trim().is_empty() => offset += line.len(),
            Some(line) => break line,
        }
    };

    let Some(delimiters) = DELIMITERS.iter().find(|d| opening.trim_end() == d.open) else {
        return Ok(no_preamble);
    };

    let start = offset + opening.len();
    let mut cursor = start;

    for line in lines {
        if line.trim_end() == delimiters.close {
            return Ok(Split {
                preamble: Some(Preamble {
                    format: delimiters.format,
                    content: &content[start..cursor],
                }),
                body: &content[cursor + line.len()..],
            });
        }
        cursor += line.len();
    }

    Err(delimiters.close)
}

/// Parse descriptor text into typed metadata and its markdown body
///
/// A missing or blank preamble yields `T::default()`. `path` is only used
/// for error context.
pub fn parse_document<'a, T>(path: &Path, content: &'a str) -> Result<(T, &'a str), DescriptorError>
where
    T: DeserializeOwned + Default,
{
    let split = split_preamble(content).map_err(|delimiter| {
        DescriptorError::UnterminatedPreamble {
            path: path.to_path_buf(),
            delimiter,
        }
    })?;

    let metadata = match split.preamble {
        Some(preamble) if !preamble.content.trim().is_empty() => {
            deserialize_preamble(path, preamble)?
        }
        _ => T::default(),
    };

    Ok((metadata, split.body))
}

/// Read a descriptor file and parse it with [`parse_document`]
pub fn read_document<T>(path: &Path) -> Result<(T, String), DescriptorError>
where
    T: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (metadata, body) = parse_document(path, &content)?;
    Ok((metadata, body.to_string()))
}

fn deserialize_preamble<T: DeserializeOwned>(
    path: &Path,
    preamble: Preamble<'_>,
) -> Result<T, DescriptorError> {
    match preamble.format {
        PreambleFormat::Yaml => {
            serde_yaml::from_str(preamble.content).map_err(|e| DescriptorError::YamlParseFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
        PreambleFormat::Toml => {
            toml::from_str(preamble.content).map_err(|e| DescriptorError::TomlParseFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
        PreambleFormat::Json => {
            serde_json::from_str(preamble.content).map_err(|e| DescriptorError::JsonParseFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}
