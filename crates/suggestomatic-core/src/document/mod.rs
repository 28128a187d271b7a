//! The single denormalized application document: users, profiles, ideas
//! and their ratings, plus the pure update operations over it.

pub mod model;
pub mod ops;
pub mod repository;
pub mod seed;

pub use model::{Document, FeedEntry, Idea, Profile, ProfileUpdate, User};
pub use repository::DocumentRepository;
