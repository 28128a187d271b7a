//! Pure update operations over the document.
//!
//! Every mutating operation takes the current document by value and returns
//! a new one; on success the caller persists the result and discards the
//! previous document. Validation failures never crash the core, they are
//! reported as rejected operations.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::error::{Result, SuggestError};

use super::model::{Document, Idea, ProfileUpdate, MAX_SCORE, MIN_SCORE};

/// Checks a username/password pair against the document.
///
/// The comparison is exact and case-sensitive on both fields, against the
/// plaintext stored password. No lockout, no hashing: an explicit known
/// weakness of the demo contract.
///
/// Returns the matching user's id, or `InvalidCredentials`. The document
/// is never modified.
pub fn sign_in(doc: &Document, username: &str, password: &str) -> Result<String> {
    doc.users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| u.id.clone())
        .ok_or(SuggestError::InvalidCredentials)
}

/// Adds a new idea to the front of `owner_id`'s idea sequence.
///
/// The title must be non-empty after trimming whitespace. The new idea gets
/// a fresh v4 UUID (collision probability treated as negligible, no retry)
/// and an empty ratings map. All other users are left untouched.
pub fn add_idea(
    mut doc: Document,
    owner_id: &str,
    title: &str,
    description: &str,
) -> Result<Document> {
    let title = title.trim();
    if title.is_empty() {
        return Err(SuggestError::validation("idea title must not be empty"));
    }

    let owner = doc
        .users
        .iter_mut()
        .find(|u| u.id == owner_id)
        .ok_or_else(|| SuggestError::not_found("user", owner_id))?;

    let idea = Idea {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        ratings: BTreeMap::new(),
    };

    // Most recent first
    owner.ideas.insert(0, idea);
    Ok(doc)
}

/// Records `rater_id`'s score for `idea_id`, overwriting any prior score
/// from the same rater.
///
/// Scores outside 1..=5 are rejected rather than clamped, so a caller bug
/// cannot silently turn into a valid rating. The rater must be an existing
/// user: rating keys stay a subset of user ids.
pub fn rate_idea(
    mut doc: Document,
    rater_id: &str,
    idea_id: &str,
    score: u8,
) -> Result<Document> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(SuggestError::validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }

    if doc.user(rater_id).is_none() {
        return Err(SuggestError::not_found("user", rater_id));
    }

    let idea = doc
        .users
        .iter_mut()
        .flat_map(|u| u.ideas.iter_mut())
        .find(|i| i.id == idea_id)
        .ok_or_else(|| SuggestError::not_found("idea", idea_id))?;

    idea.ratings.insert(rater_id.to_string(), score);
    Ok(doc)
}

/// Merges the supplied profile fields into `user_id`'s profile.
///
/// Fields not supplied keep their current value.
pub fn update_profile(
    mut doc: Document,
    user_id: &str,
    update: ProfileUpdate,
) -> Result<Document> {
    let user = doc
        .users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or_else(|| SuggestError::not_found("user", user_id))?;

    if let Some(name) = update.name {
        user.profile.name = name;
    }
    if let Some(bio) = update.bio {
        user.profile.bio = bio;
    }
    if let Some(funny_title) = update.funny_title {
        user.profile.funny_title = funny_title;
    }
    if let Some(super_power) = update.super_power {
        user.profile.super_power = super_power;
    }

    Ok(doc)
}
