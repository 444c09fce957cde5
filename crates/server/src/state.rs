use service::posts::{PostStore, SharedPostStore};

/// State handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct ServerState {
    pub posts: SharedPostStore,
}

impl ServerState {
    /// Fresh state with an empty post store
    pub fn new() -> Self {
        Self { posts: PostStore::shared() }
    }

    pub fn with_store(posts: SharedPostStore) -> Self {
        Self { posts }
    }
}

impl Default for ServerState {
    fn default() -> Self { Self::new() }
}
