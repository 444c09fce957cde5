//! Service layer holding the posts business rules.
//! - `posts::PostStore` owns the records and all CRUD logic.
//! - `errors::ServiceError` carries the two recoverable failure kinds.

pub mod errors;
pub mod posts;

pub use errors::ServiceError;
pub use posts::{Post, PostInput, PostStore, SharedPostStore};
