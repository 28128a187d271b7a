//! Announcement service.
//!
//! Same cache-plus-repository shape as the document service, for the
//! single global presenter announcement.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use suggestomatic_core::announcement::{Announcement, AnnouncementRepository};
use suggestomatic_core::error::Result;

/// Service for reading and publishing the presenter announcement.
#[derive(Clone)]
pub struct AnnouncementService {
    current: Arc<Mutex<Option<Announcement>>>,
    repository: Arc<dyn AnnouncementRepository>,
}

impl AnnouncementService {
    pub fn new(repository: Arc<dyn AnnouncementRepository>) -> Self {
        let current = repository.load();
        Self {
            current: Arc::new(Mutex::new(current)),
            repository,
        }
    }

    /// The currently published announcement, if any.
    pub fn current(&self) -> Option<Announcement> {
        self.lock().clone()
    }

    /// Overwrites the announcement singleton.
    ///
    /// Only the distinguished announcer user may publish; everyone else
    /// gets `Forbidden`.
    pub fn publish(&self, user_id: &str, presenter: &str, date: &str) -> Result<Announcement> {
        Announcement::ensure_can_publish(user_id)?;

        let announcement = Announcement {
            presenter: presenter.to_string(),
            date: date.to_string(),
        };

        self.repository.save(&announcement);
        *self.lock() = Some(announcement.clone());
        Ok(announcement)
    }

    // A poisoned lock still holds a valid value; recover it rather than
    // failing every later publish
    fn lock(&self) -> MutexGuard<'_, Option<Announcement>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_announcement_repository::JsonAnnouncementRepository;
    use suggestomatic_core::announcement::ANNOUNCER_USER_ID;
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir) -> AnnouncementService {
        let repo = JsonAnnouncementRepository::new(temp_dir.path().join("announce.json"));
        AnnouncementService::new(Arc::new(repo))
    }

    #[test]
    fn test_starts_unset() {
        let temp_dir = TempDir::new().unwrap();
        assert!(service(&temp_dir).current().is_none());
    }

    #[test]
    fn test_publish_requires_the_announcer() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        assert!(service.publish("u2", "Rahul R", "2026-09-08").is_err());
        assert!(service.current().is_none());

        let published = service
            .publish(ANNOUNCER_USER_ID, "Rahul R", "2026-09-08")
            .unwrap();
        assert_eq!(published.presenter, "Rahul R");
    }

    #[test]
    fn test_survives_a_poisoned_lock() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let poisoner = service.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.current.lock().unwrap();
            panic!("poisoning the announcement lock");
        })
        .join()
        .unwrap_err();

        service
            .publish(ANNOUNCER_USER_ID, "Bharath S", "2026-09-01")
            .unwrap();
        assert_eq!(service.current().unwrap().presenter, "Bharath S");
    }

    #[test]
    fn test_publish_overwrites_and_persists() {
        let temp_dir = TempDir::new().unwrap();

        {
            let service = service(&temp_dir);
            service.publish(ANNOUNCER_USER_ID, "Bharath S", "2026-09-01").unwrap();
            service.publish(ANNOUNCER_USER_ID, "Rahul R", "2026-09-08").unwrap();
        }

        let reloaded = service(&temp_dir);
        let current = reloaded.current().unwrap();
        assert_eq!(current.presenter, "Rahul R");
        assert_eq!(current.date, "2026-09-08");
    }
}
