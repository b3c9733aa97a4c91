use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, Comment, CommentDraft};

/// Number of posts in the featured view.
pub const FEATURED_COUNT: usize = 3;

/// Blog store - the single owner of the blog collection.
///
/// Operations never fail. A missing id is reported as `None` and leaves the
/// collection untouched.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Snapshot of the whole collection, newest first.
    async fn list(&self) -> Arc<Vec<Blog>>;

    /// Find a blog by its ID.
    async fn get(&self, id: &str) -> Option<Blog>;

    /// Insert a new blog at the front of the collection.
    async fn create(&self, draft: BlogDraft) -> Blog;

    /// Add one like. Returns the updated blog.
    async fn like(&self, id: &str) -> Option<Blog>;

    /// Append a comment to a blog's thread. Returns the stored comment.
    async fn add_comment(&self, blog_id: &str, draft: CommentDraft) -> Option<Comment>;

    /// The first [`FEATURED_COUNT`] blogs of the current collection.
    async fn featured(&self) -> Vec<Blog> {
        self.list()
            .await
            .iter()
            .take(FEATURED_COUNT)
            .cloned()
            .collect()
    }

    /// Number of blogs in the collection.
    async fn len(&self) -> usize {
        self.list().await.len()
    }
}
