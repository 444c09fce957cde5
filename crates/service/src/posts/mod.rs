//! Posts domain: record model and the in-memory store holding them.

pub mod model;
pub mod store;

pub use model::{Post, PostInput};
pub use store::{PostStore, SharedPostStore};
