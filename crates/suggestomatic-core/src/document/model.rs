//! Document domain models.
//!
//! The entire persisted state is one `Document` holding every user, their
//! profile and their ideas. Serde field names keep the original on-disk
//! spelling (`funnyTitle`, `superPower`) so an existing persisted blob
//! stays readable.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest accepted rating score.
pub const MIN_SCORE: u8 = 1;
/// Highest accepted rating score.
pub const MAX_SCORE: u8 = 5;

/// Free-form profile fields owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub funny_title: String,
    pub super_power: String,
}

/// Partial profile payload for edit-profile commands.
///
/// Fields left as `None` keep their stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub funny_title: Option<String>,
    pub super_power: Option<String>,
}

/// A pitched startup idea owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Rater user id -> score (1..=5). At most one entry per rater;
    /// a repeat rating overwrites the previous value.
    #[serde(default)]
    pub ratings: BTreeMap<String, u8>,
}

impl Idea {
    /// Arithmetic mean of all rating values, `None` when unrated.
    pub fn average(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u32 = self.ratings.values().map(|&v| u32::from(v)).sum();
        Some(f64::from(sum) / self.ratings.len() as f64)
    }

    /// One-decimal display form of the average, `—` when unrated.
    pub fn display_average(&self) -> String {
        match self.average() {
            Some(avg) => format!("{avg:.1}"),
            None => "—".to_string(),
        }
    }
}

/// A seeded user. Users are created at seed time only; there is no
/// sign-up flow and users are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Stored and compared in plaintext. This is a known, deliberate
    /// weakness of the demo, not a defect to fix: the application has no
    /// real authentication.
    pub password: String,
    pub profile: Profile,
    #[serde(default)]
    pub ideas: Vec<Idea>,
}

/// The entire persisted application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
}

/// One row of the cross-user idea feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub idea: Idea,
    pub owner_id: String,
    pub owner_name: String,
}

impl Document {
    /// Looks up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Locates an idea by id across all users' idea sequences.
    pub fn find_idea(&self, idea_id: &str) -> Option<(&User, &Idea)> {
        self.users.iter().find_map(|user| {
            user.ideas
                .iter()
                .find(|idea| idea.id == idea_id)
                .map(|idea| (user, idea))
        })
    }

    /// All ideas across all users, best average first.
    ///
    /// The sort is stable: ideas with equal averages keep document order
    /// (user order, then per-user idea order), and unrated ideas always
    /// come after rated ones.
    pub fn feed(&self) -> Vec<FeedEntry> {
        let mut entries: Vec<FeedEntry> = self
            .users
            .iter()
            .flat_map(|user| {
                user.ideas.iter().map(|idea| FeedEntry {
                    idea: idea.clone(),
                    owner_id: user.id.clone(),
                    owner_name: user.profile.name.clone(),
                })
            })
            .collect();

        entries.sort_by(|a, b| match (a.idea.average(), b.idea.average()) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        entries
    }
}
