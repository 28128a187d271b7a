//! Built-in seed document.
//!
//! Used whenever no persisted document exists (or the persisted blob is
//! unreadable). Every call constructs a fresh copy, so a caller mutating
//! one loaded instance can never corrupt a future fallback load.

use std::collections::BTreeMap;

use super::model::{Document, Idea, Profile, User};

impl Document {
    /// Returns a freshly constructed copy of the built-in demo dataset.
    pub fn seed() -> Self {
        Document {
            users: vec![
                User {
                    id: "u1".to_string(),
                    username: "bharath".to_string(),
                    password: "1234".to_string(),
                    profile: Profile {
                        name: "Bharath S".to_string(),
                        bio: "Aspiring startup billionaire 💸".to_string(),
                        funny_title: "Chief Snack Officer".to_string(),
                        super_power: "Can debug with eyes closed".to_string(),
                    },
                    ideas: vec![Idea {
                        id: "i1".to_string(),
                        title: "Smart Fridge that Orders Snacks".to_string(),
                        description: "Fridge detects snacks running low and orders instantly."
                            .to_string(),
                        ratings: BTreeMap::from([
                            ("u1".to_string(), 5),
                            ("u2".to_string(), 4),
                        ]),
                    }],
                },
                User {
                    id: "u2".to_string(),
                    username: "rahul".to_string(),
                    password: "abcd".to_string(),
                    profile: Profile {
                        name: "Rahul R".to_string(),
                        bio: "Techie & meme enthusiast".to_string(),
                        funny_title: "Meme Distribution Head".to_string(),
                        super_power: "Invents problems to solve".to_string(),
                    },
                    ideas: Vec::new(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let doc = Document::seed();
        assert_eq!(doc.users.len(), 2);
        assert_eq!(doc.users[0].id, "u1");
        assert_eq!(doc.users[1].id, "u2");

        let (_, idea) = doc.find_idea("i1").unwrap();
        assert_eq!(idea.ratings.len(), 2);
        assert_eq!(idea.average(), Some(4.5));
    }

    #[test]
    fn test_seed_copies_are_independent() {
        let mut first = Document::seed();
        first.users[0].profile.name = "Mutated".to_string();
        first.users[0].ideas.clear();

        // A later seed must be unaffected by mutations of an earlier copy
        let second = Document::seed();
        assert_eq!(second.users[0].profile.name, "Bharath S");
        assert_eq!(second.users[0].ideas.len(), 1);
    }

    #[test]
    fn test_seed_invariants() {
        let doc = Document::seed();

        // Unique user ids and usernames
        for (i, a) in doc.users.iter().enumerate() {
            for b in doc.users.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.username, b.username);
            }
        }

        // Rating keys are a subset of user ids
        for user in &doc.users {
            for idea in &user.ideas {
                for rater in idea.ratings.keys() {
                    assert!(doc.user(rater).is_some());
                }
            }
        }
    }
}
