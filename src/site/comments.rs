//! Comment and star-rating store of the display page.
//!
//! The browser keeps these in `localStorage`; here the same records live
//! in a local JSON file, newest first. A missing or unreadable store is an
//! empty list, never a failure, so listing always works.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ScriptError;

/// Highest star rating a comment can carry
pub const MAX_RATING: u8 = 5;

/// One visitor comment with its optional star rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Creation time in epoch milliseconds, doubling as the id
    pub id: i64,
    /// The comment body, trimmed
    pub text: String,
    /// Star rating, 0 meaning unrated
    pub rating: u8,
    /// Human-readable creation time
    pub timestamp: String,
}

/// File-backed comment list
pub struct CommentStore {
    /// Location of the JSON store
    path: PathBuf,
}

impl CommentStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> CommentStore {
        CommentStore { path: path.into() }
    }

    /// The store location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All comments, newest first; degrades to empty on a missing or
    /// corrupt store
    pub fn load(&self) -> Vec<Comment> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // A store that does not exist yet is just empty
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    "Comment store {} is unreadable ({}); starting empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(comments) => comments,
            Err(e) => {
                warn!(
                    "Comment store {} is unreadable ({}); starting empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Validate, prepend and persist a new comment
    pub fn add(&self, text: &str, rating: u8) -> Result<Comment, ScriptError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScriptError::InvalidInput(String::from(
                "comment text must not be empty",
            )));
        }
        if rating > MAX_RATING {
            return Err(ScriptError::InvalidInput(format!(
                "rating must be between 0 and {}",
                MAX_RATING
            )));
        }

        let comment = Comment {
            id: Utc::now().timestamp_millis(),
            text: text.to_string(),
            rating,
            timestamp: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
        };

        let mut comments = self.load();
        comments.insert(0, comment.clone());

        let raw = serde_json::to_string_pretty(&comments)
            .map_err(|e| ScriptError::JsonOutput(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| ScriptError::Io(format!("cannot write {}: {}", self.path.display(), e)))?;

        Ok(comment)
    }
}

/// Star line for a rating: filled stars then hollow ones up to five
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    format!(
        "{}{}",
        "\u{2605}".repeat(filled),
        "\u{2606}".repeat(usize::from(MAX_RATING) - filled)
    )
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(tmp: &TempDir) -> CommentStore {
        CommentStore::new(tmp.path().join("bbtm_comments.json"))
    }

    #[test]
    fn added_comments_come_back_newest_first() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store.add("first", 3).unwrap();
        store.add("second", 5).unwrap();

        let comments = store.load();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "second");
        assert_eq!(comments[0].rating, 5);
        assert_eq!(comments[1].text, "first");
    }

    #[test]
    fn text_is_trimmed_and_blank_text_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let comment = store.add("  padded  ", 0).unwrap();
        assert_eq!(comment.text, "padded");

        assert!(matches!(
            store.add("   ", 1),
            Err(ScriptError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            store_in(&tmp).add("ok", 6),
            Err(ScriptError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_store_lists_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(store_in(&tmp).load().is_empty());
    }

    #[test]
    fn corrupt_store_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn unreadable_store_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        // A directory at the store path fails the read without being missing
        fs::create_dir(store.path()).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn star_lines_fill_then_hollow() {
        assert_eq!(stars(0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
        assert_eq!(stars(3), "\u{2605}\u{2605}\u{2605}\u{2606}\u{2606}");
        assert_eq!(stars(5), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        assert_eq!(stars(9), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
    }
}
