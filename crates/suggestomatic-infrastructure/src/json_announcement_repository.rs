//! File-backed announcement singleton repository.

use std::path::PathBuf;

use suggestomatic_core::announcement::{Announcement, AnnouncementRepository};
use tracing::warn;

use crate::paths::{PathError, SuggestPaths};
use crate::storage::AtomicJsonFile;

/// Persists the presenter announcement under its own key, separate from
/// the document blob.
pub struct JsonAnnouncementRepository {
    file: AtomicJsonFile<Announcement>,
}

impl JsonAnnouncementRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a repository over the default platform path
    /// (`~/.config/suggestomatic/presenter_announcement.json`).
    pub fn from_default_path() -> Result<Self, PathError> {
        Ok(Self::new(SuggestPaths::announcement_file()?))
    }
}

impl AnnouncementRepository for JsonAnnouncementRepository {
    fn load(&self) -> Option<Announcement> {
        match self.file.load() {
            Ok(announcement) => announcement,
            Err(err) => {
                warn!(
                    path = %self.file.path().display(),
                    error = %err,
                    "failed to read persisted announcement"
                );
                None
            }
        }
    }

    fn save(&self, announcement: &Announcement) {
        if let Err(err) = self.file.save(announcement) {
            warn!(
                path = %self.file.path().display(),
                error = %err,
                "failed to persist announcement"
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
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonAnnouncementRepository::new(temp_dir.path().join("announce.json"));

        assert!(repo.load().is_none());
    }

    #[test]
    fn test_save_overwrites_the_singleton() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonAnnouncementRepository::new(temp_dir.path().join("announce.json"));

        repo.save(&Announcement {
            presenter: "Bharath S".to_string(),
            date: "2026-09-01".to_string(),
        });
        repo.save(&Announcement {
            presenter: "Rahul R".to_string(),
            date: "2026-09-08".to_string(),
        });

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.presenter, "Rahul R");
        assert_eq!(loaded.date, "2026-09-08");
    }

    #[test]
    fn test_corrupt_file_is_treated_as_unset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("announce.json");
        fs::write(&path, "42").unwrap();

        let repo = JsonAnnouncementRepository::new(path);
        assert!(repo.load().is_none());
    }
}
