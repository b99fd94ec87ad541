// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use md5::{Digest, Md5};

/// Content identifier of a zero-length (or missing) audio file
pub const EMPTY_CONTENT_ID: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Compute the feed GUID for a chunk of audio: lowercase hex of its MD5
///
/// MD5 is used for change detection only, not for integrity.
pub fn content_id(audio: &[u8]) -> String {
    hex::encode(Md5::digest(audio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_to_constant() {
        assert_eq!(content_id(b""), EMPTY_CONTENT_ID);
    }

    #[test]
    fn known_digest() {
        assert_eq!(content_id(b"AB"), "b86fc6b051f63d73de262d4c34e3a0a9");
    }

    #[test]
    fn identical_bytes_give_identical_ids() {
        let audio = vec![0xffu8; 4096];
        assert_eq!(content_id(&audio), content_id(&audio.clone()));
    }

    #[test]
    fn any_byte_change_changes_id() {
        assert_ne!(content_id(b"AB"), content_id(b"AC"));
        assert_ne!(content_id(b"AB"), content_id(b"AB\0"));
    }

    #[test]
    fn id_is_32_lowercase_hex_chars() {
        let id = content_id(b"fake audio");
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
