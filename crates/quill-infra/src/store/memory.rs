//! In-memory blog store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Blog, BlogDraft, Comment, CommentDraft};
use quill_core::ports::BlogStore;

use super::seed::{SeedError, seed_blogs};

/// In-memory blog store holding the collection as a shared snapshot.
///
/// Every mutation builds a new vector and swaps it in under the write lock,
/// so a snapshot handed out by [`BlogStore::list`] never changes.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogStore {
    blogs: RwLock<Arc<Vec<Blog>>>,
}

impl InMemoryBlogStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_blogs(Vec::new())
    }

    /// A store holding `blogs` in the given order.
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: RwLock::new(Arc::new(blogs)),
        }
    }

    /// A store holding the embedded seed posts.
    pub fn seeded() -> Result<Self, SeedError> {
        let blogs = seed_blogs()?;
        tracing::debug!(count = blogs.len(), "Blog store seeded");
        Ok(Self::with_blogs(blogs))
    }

    /// Apply `mutate` to a copy of blog `id` and swap the new collection in.
    async fn update<T>(&self, id: &str, mutate: impl FnOnce(&mut Blog) -> T) -> Option<T> {
        let mut current = self.blogs.write().await;
        let index = current.iter().position(|blog| blog.id == id)?;

        let mut next = Vec::clone(&current);
        let result = mutate(&mut next[index]);
        *current = Arc::new(next);

        Some(result)
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list(&self) -> Arc<Vec<Blog>> {
        self.blogs.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<Blog> {
        self.blogs
            .read()
            .await
            .iter()
            .find(|blog| blog.id == id)
            .cloned()
    }

    async fn create(&self, draft: BlogDraft) -> Blog {
        let blog = Blog::from_draft(draft);
        let mut current = self.blogs.write().await;

        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(blog.clone());
        next.extend(current.iter().cloned());
        *current = Arc::new(next);

        tracing::debug!(blog_id = %blog.id, title = %blog.title, "Blog created");
        blog
    }

    async fn like(&self, id: &str) -> Option<Blog> {
        let liked = self
            .update(id, |blog| {
                blog.likes = blog.likes.saturating_add(1);
                blog.clone()
            })
            .await;

        match &liked {
            Some(blog) => tracing::debug!(blog_id = %id, likes = blog.likes, "Blog liked"),
            None => tracing::debug!(blog_id = %id, "Like ignored, no such blog"),
        }
        liked
    }

    async fn add_comment(&self, blog_id: &str, draft: CommentDraft) -> Option<Comment> {
        let comment = Comment::from_draft(draft);
        let added = self
            .update(blog_id, |blog| blog.comments.push(comment.clone()))
            .await;

        match added {
            Some(()) => {
                tracing::debug!(blog_id = %blog_id, comment_id = %comment.id, "Comment added");
                Some(comment)
            }
            None => {
                tracing::debug!(blog_id = %blog_id, "Comment ignored, no such blog");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Author;

    fn draft(title: &str) -> BlogDraft {
        BlogDraft {
            title: title.to_string(),
            content: "<p>c</p>".to_string(),
            excerpt: "c...".to_string(),
            cover_image_url: "u".to_string(),
            author: Author::new("user-1", "Alex Johnson", "avatar"),
            tags: vec!["x".to_string()],
            read_time: 1,
        }
    }

    fn comment(content: &str) -> CommentDraft {
        CommentDraft {
            author: Author::new("user-2", "Sarah Miller", "avatar"),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_prepends_new_blog() {
        let store = InMemoryBlogStore::seeded().unwrap();
        assert_eq!(store.len().await, 5);

        let created = store.create(draft("T")).await;

        let blogs = store.list().await;
        assert_eq!(blogs.len(), 6);
        assert_eq!(blogs[0].id, created.id);
        assert_eq!(blogs[0].title, "T");
        assert_eq!(blogs[0].likes, 0);
        assert!(blogs[0].comments.is_empty());
        assert_eq!(blogs[1].id, "blog-1");
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryBlogStore::new();
        let a = store.create(draft("a")).await;
        let b = store.create(draft("b")).await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_like_twice_adds_two() {
        let store = InMemoryBlogStore::seeded().unwrap();
        let before = store.list().await;

        store.like("blog-1").await.unwrap();
        let liked = store.like("blog-1").await.unwrap();

        assert_eq!(liked.likes, 158);
        assert_eq!(store.get("blog-1").await.unwrap().likes, 158);

        let after = store.list().await;
        assert_eq!(after[1..], before[1..]);
        assert_eq!(after[0].comments, before[0].comments);
        assert_eq!(after[0].updated_at, before[0].updated_at);
    }

    #[tokio::test]
    async fn test_like_saturates_at_max() {
        let mut blog = Blog::from_draft(draft("popular"));
        blog.likes = u64::MAX;
        let id = blog.id.clone();
        let store = InMemoryBlogStore::with_blogs(vec![blog]);

        let liked = store.like(&id).await.unwrap();
        assert_eq!(liked.likes, u64::MAX);
    }

    #[tokio::test]
    async fn test_snapshot_is_not_affected_by_later_mutation() {
        let store = InMemoryBlogStore::seeded().unwrap();
        let snapshot = store.list().await;

        store.like("blog-2").await;
        store.create(draft("new")).await;

        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot[1].likes, 243);
    }

    #[tokio::test]
    async fn test_unknown_id_mutates_nothing() {
        let store = InMemoryBlogStore::seeded().unwrap();
        let before = store.list().await;

        assert!(store.get("missing").await.is_none());
        assert!(store.like("missing").await.is_none());
        assert!(store.add_comment("missing", comment("hi")).await.is_none());

        assert_eq!(*store.list().await, *before);
    }

    #[tokio::test]
    async fn test_add_comment_appends_in_order() {
        let store = InMemoryBlogStore::seeded().unwrap();
        let before = store.get("blog-1").await.unwrap().comments;

        let added = store
            .add_comment("blog-1", comment("Great read"))
            .await
            .unwrap();

        let comments = store.get("blog-1").await.unwrap().comments;
        assert_eq!(comments.len(), before.len() + 1);
        assert_eq!(comments[..before.len()], before[..]);
        assert_eq!(comments.last(), Some(&added));
        assert_eq!(added.content, "Great read");
        assert!(added.id.starts_with("comment-"));
    }

    #[tokio::test]
    async fn test_featured_is_prefix_of_three() {
        let store = InMemoryBlogStore::seeded().unwrap();
        let featured = store.featured().await;
        let ids: Vec<&str> = featured.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["blog-1", "blog-2", "blog-3"]);

        let created = store.create(draft("fresh")).await;
        let featured = store.featured().await;
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, created.id);
    }

    #[tokio::test]
    async fn test_featured_with_fewer_than_three() {
        let store = InMemoryBlogStore::new();
        assert!(store.featured().await.is_empty());

        store.create(draft("only")).await;
        assert_eq!(store.featured().await.len(), 1);
    }
}
