//! Document repository trait.

use super::model::Document;

/// Storage for the single denormalized document.
///
/// `load` runs once at application start and must fall back to a fresh
/// seed copy on missing or corrupt data. `save` runs after every
/// successful update operation and is best-effort: implementations log
/// failures and swallow them, the in-memory document stays authoritative
/// for the session.
pub trait DocumentRepository: Send + Sync {
    fn load(&self) -> Document;

    fn save(&self, document: &Document);
}
