//! Presenter announcement singleton.
//!
//! Stored independently of the document under its own key. There is one
//! global announcement, and only the distinguished announcer user may
//! overwrite it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestError};

/// The only user id allowed to overwrite the announcement.
pub const ANNOUNCER_USER_ID: &str = "u1";

/// Who presents next, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub presenter: String,
    pub date: String,
}

impl Announcement {
    /// Checks that `user_id` may publish announcements.
    pub fn ensure_can_publish(user_id: &str) -> Result<()> {
        if user_id == ANNOUNCER_USER_ID {
            Ok(())
        } else {
            Err(SuggestError::forbidden(format!(
                "user '{user_id}' may not publish announcements"
            )))
        }
    }
}

/// Storage for the announcement singleton.
///
/// Same persistence contract as the document repository: `load` yields
/// `None` when nothing was ever published, `save` is best-effort.
pub trait AnnouncementRepository: Send + Sync {
    fn load(&self) -> Option<Announcement>;

    fn save(&self, announcement: &Announcement);
}
