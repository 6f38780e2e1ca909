//! Content key derivation.
//!
//! The key is the only identity a content record has: both the remote
//! document store and browser storage are addressed by it, so the same logical
//! chapter must always produce the same string.

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;

use serde::{Deserialize, Serialize};

/// Namespace prefix shared by every content key.
pub const CONTENT_KEY_PREFIX: &str = "nst_content";

/// Class levels that are split into streams (science, commerce, arts...).
const STREAMED_CLASS_LEVELS: &[&str] = &["11", "12"];

/// Build the storage key for one chapter's content record.
///
/// The `-{stream}` suffix is only added for streamed class levels and only
/// when `stream` is non-empty.
#[must_use]
pub fn derive_key(board: &str, class_level: &str, stream: Option<&str>, subject_name: &str, chapter_id: &str) -> String {
    let stream_suffix = match stream {
        Some(s) if !s.is_empty() && STREAMED_CLASS_LEVELS.contains(&class_level) => format!("-{s}"),
        _ => String::new(),
    };
    format!("{CONTENT_KEY_PREFIX}_{board}_{class_level}{stream_suffix}_{subject_name}_{chapter_id}")
}

/// Everything needed to address and describe one chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    pub board: String,
    pub class_level: String,
    pub stream: Option<String>,
    pub subject_name: String,
    pub chapter_id: String,
    /// Display title; not part of the key.
    pub chapter_title: String,
}

impl ChapterRef {
    /// Storage key for this chapter.
    #[must_use]
    pub fn content_key(&self) -> String {
        derive_key(
            &self.board,
            &self.class_level,
            self.stream.as_deref(),
            &self.subject_name,
            &self.chapter_id,
        )
    }

    /// Subtitle shown under the modal heading, e.g. `"Physics • Class 11"`.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} • Class {}", self.subject_name, self.class_level)
    }
}
