//! Document service: the single store object the rest of the application
//! talks to.
//!
//! Holds the current document in memory and persists after every
//! successful update operation. Commands are handled to completion one at
//! a time under the document lock, so there is no overlapping mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use suggestomatic_core::document::{ops, Document, DocumentRepository, FeedEntry, ProfileUpdate, User};
use suggestomatic_core::error::Result;

/// Service for reading and updating the application document.
///
/// Constructed once at process start (`load` runs exactly once) and passed
/// by reference to whatever consumes it.
#[derive(Clone)]
pub struct DocumentService {
    /// Current document. The in-memory copy is authoritative; persistence
    /// is best-effort.
    document: Arc<Mutex<Document>>,
    repository: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    /// Creates the service, loading the document (or seed fallback) from
    /// the repository.
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        let document = repository.load();
        Self {
            document: Arc::new(Mutex::new(document)),
            repository,
        }
    }

    /// Checks credentials and returns the matching user's id.
    pub fn sign_in(&self, username: &str, password: &str) -> Result<String> {
        let document = self.lock();
        ops::sign_in(&document, username, password)
    }

    /// Adds an idea to the front of `owner_id`'s idea list and persists.
    pub fn add_idea(&self, owner_id: &str, title: &str, description: &str) -> Result<()> {
        self.apply(|document| ops::add_idea(document, owner_id, title, description))
    }

    /// Upserts `rater_id`'s score for `idea_id` and persists.
    pub fn rate_idea(&self, rater_id: &str, idea_id: &str, score: u8) -> Result<()> {
        self.apply(|document| ops::rate_idea(document, rater_id, idea_id, score))
    }

    /// Merges profile fields for `user_id` and persists.
    pub fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<()> {
        self.apply(|document| ops::update_profile(document, user_id, update))
    }

    /// All ideas across all users, best average first.
    pub fn feed(&self) -> Vec<FeedEntry> {
        self.lock().feed()
    }

    /// Snapshot of one user.
    pub fn user(&self, user_id: &str) -> Option<User> {
        self.lock().user(user_id).cloned()
    }

    /// Snapshot of the whole document.
    pub fn document(&self) -> Document {
        self.lock().clone()
    }

    /// Runs one update operation to completion: compute the next document,
    /// persist it, swap it in. A rejected operation leaves the current
    /// document untouched.
    fn apply<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(Document) -> Result<Document>,
    {
        let mut guard = self.lock();
        let next = op(guard.clone())?;
        self.repository.save(&next);
        *guard = next;
        Ok(())
    }

    /// The document stays consistent across a poisoned lock (`apply` only
    /// swaps in fully-computed documents), so a panic elsewhere must not
    /// wedge every later command.
    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_document_repository::JsonDocumentRepository;
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir) -> DocumentService {
        let repo = JsonDocumentRepository::new(temp_dir.path().join("doc.json"));
        DocumentService::new(Arc::new(repo))
    }

    #[test]
    fn test_starts_from_seed_on_empty_storage() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        assert_eq!(service.document(), Document::seed());
    }

    #[test]
    fn test_sign_in_does_not_mutate() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        assert_eq!(service.sign_in("bharath", "1234").unwrap(), "u1");
        assert!(service.sign_in("bharath", "nope").is_err());
        assert_eq!(service.document(), Document::seed());
    }

    #[test]
    fn test_updates_persist_across_restarts() {
        let temp_dir = TempDir::new().unwrap();

        {
            let service = service(&temp_dir);
            service.add_idea("u2", "Sock Matcher AI", "never lose a sock again").unwrap();
            service.rate_idea("u1", "i1", 3).unwrap();
        }

        // A new service over the same path sees the persisted state
        let reloaded = service(&temp_dir);
        let document = reloaded.document();
        assert_eq!(document.user("u2").unwrap().ideas[0].title, "Sock Matcher AI");
        let (_, idea) = document.find_idea("i1").unwrap();
        assert_eq!(idea.ratings.get("u1"), Some(&3));
    }

    #[test]
    fn test_rejected_operation_leaves_state_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        assert!(service.add_idea("u1", "   ", "blank title").is_err());
        assert!(service.rate_idea("u1", "i1", 6).is_err());
        assert_eq!(service.document(), Document::seed());
    }

    #[test]
    fn test_survives_a_poisoned_lock() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let poisoner = service.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.document.lock().unwrap();
            panic!("poisoning the document lock");
        })
        .join()
        .unwrap_err();

        assert_eq!(service.sign_in("bharath", "1234").unwrap(), "u1");
        service.rate_idea("u1", "i1", 2).unwrap();
        let document = service.document();
        let (_, idea) = document.find_idea("i1").unwrap();
        assert_eq!(idea.ratings.get("u1"), Some(&2));
    }

    #[test]
    fn test_feed_reflects_latest_ratings() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        service.add_idea("u2", "Unrated idea", "").unwrap();
        let feed = service.feed();

        // Seeded idea (avg 4.5) first, unrated idea last
        assert_eq!(feed[0].idea.id, "i1");
        assert_eq!(feed[1].idea.title, "Unrated idea");
        assert_eq!(feed[1].idea.display_average(), "—");
    }
}
