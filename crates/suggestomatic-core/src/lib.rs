pub mod announcement;
pub mod document;
pub mod error;

// Re-export common error type
pub use error::{Result, SuggestError};
