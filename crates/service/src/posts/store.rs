use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::posts::model::{Post, PostInput};

/// Store handle shared across request handlers. The store does no locking of
/// its own, so every caller goes through this lock.
pub type SharedPostStore = Arc<RwLock<PostStore>>;

/// In-memory post collection.
///
/// Records keep insertion order. At any time no two records share an `id`
/// and no two records share a `title` (exact, case-sensitive comparison).
/// Every operation either fully applies or leaves the store untouched.
#[derive(Debug, Default, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self { Self::default() }

    /// Empty store wrapped for use as shared server state
    pub fn shared() -> SharedPostStore { Arc::new(RwLock::new(Self::new())) }

    pub fn len(&self) -> usize { self.posts.len() }

    pub fn is_empty(&self) -> bool { self.posts.is_empty() }

    /// All posts in insertion order
    pub fn find_all(&self) -> &[Post] { &self.posts }

    pub fn find_one(&self, id: u64) -> Result<&Post, ServiceError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("Post"))
    }

    /// Insert a new post with id = max(existing ids, 0) + 1.
    ///
    /// Ids are not globally monotonic: deleting the highest id and creating
    /// again hands the same id out a second time.
    pub fn create(&mut self, input: PostInput) -> Result<Post, ServiceError> {
        if self.title_taken(&input.title, None) {
            return Err(ServiceError::conflict("Post title"));
        }

        let id = self.next_id();
        let post = Post::from_input(id, input);
        self.posts.push(post.clone());
        debug!(id, count = self.posts.len(), "post created");
        Ok(post)
    }

    /// Replace the post at `id` in place, keeping its id and position.
    pub fn update(&mut self, id: u64, input: PostInput) -> Result<Post, ServiceError> {
        info!(id, "updating post");

        let index = self.position(id)?;
        // the record being replaced may keep its own title
        if self.title_taken(&input.title, Some(id)) {
            return Err(ServiceError::conflict("Post title"));
        }

        let post = Post::from_input(id, input);
        self.posts[index] = post.clone();
        Ok(post)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), ServiceError> {
        let index = self.position(id)?;
        self.posts.remove(index);
        debug!(id, count = self.posts.len(), "post deleted");
        Ok(())
    }

    fn position(&self, id: u64) -> Result<usize, ServiceError> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("Post"))
    }

    fn title_taken(&self, title: &str, except: Option<u64>) -> bool {
        self.posts
            .iter()
            .any(|p| p.title == title && Some(p.id) != except)
    }

    fn next_id(&self) -> u64 {
        self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}
