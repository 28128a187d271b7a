//! File-backed document repository.

use std::path::PathBuf;

use suggestomatic_core::document::{Document, DocumentRepository};
use tracing::warn;

use crate::paths::{PathError, SuggestPaths};
use crate::storage::AtomicJsonFile;

/// Persists the document as one pretty-printed JSON blob.
///
/// Missing or unreadable data falls back to a fresh seed copy; a failed
/// save only logs a warning, the in-memory document stays authoritative
/// for the session.
pub struct JsonDocumentRepository {
    file: AtomicJsonFile<Document>,
}

impl JsonDocumentRepository {
    /// Creates a repository over an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a repository over the default platform path
    /// (`~/.config/suggestomatic/friends_startup_data_v1.json`).
    pub fn from_default_path() -> Result<Self, PathError> {
        Ok(Self::new(SuggestPaths::document_file()?))
    }
}

impl DocumentRepository for JsonDocumentRepository {
    fn load(&self) -> Document {
        match self.file.load() {
            Ok(Some(document)) => document,
            Ok(None) => Document::seed(),
            Err(err) => {
                warn!(
                    path = %self.file.path().display(),
                    error = %err,
                    "failed to read persisted document, falling back to seed"
                );
                Document::seed()
            }
        }
    }

    fn save(&self, document: &Document) {
        if let Err(err) = self.file.save(document) {
            warn!(
                path = %self.file.path().display(),
                error = %err,
                "failed to persist document, in-memory state remains authoritative"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_seed() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonDocumentRepository::new(temp_dir.path().join("doc.json"));

        assert_eq!(repo.load(), Document::seed());
    }

    #[test]
    fn test_load_twice_yields_independent_seed_copies() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonDocumentRepository::new(temp_dir.path().join("doc.json"));

        let mut first = repo.load();
        first.users[0].ideas.clear();
        first.users[0].profile.name = "Mutated".to_string();

        // No intervening save: the second load must be untouched
        let second = repo.load();
        assert_eq!(second, Document::seed());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonDocumentRepository::new(temp_dir.path().join("doc.json"));

        let document = suggestomatic_core::document::ops::add_idea(
            Document::seed(),
            "u2",
            "Reverse Alarm Clock",
            "wakes the neighbours instead",
        )
        .unwrap();

        repo.save(&document);
        assert_eq!(repo.load(), document);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_seed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        fs::write(&path, "{\"users\": [oops").unwrap();

        let repo = JsonDocumentRepository::new(path);
        assert_eq!(repo.load(), Document::seed());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        // A directory path can never be written as a file
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonDocumentRepository::new(temp_dir.path().to_path_buf());

        // Must not panic or return an error
        repo.save(&Document::seed());
    }

    #[test]
    fn test_persisted_blob_uses_original_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        let repo = JsonDocumentRepository::new(path.clone());

        repo.save(&Document::seed());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("funnyTitle"));
        assert!(raw.contains("superPower"));
    }
}
