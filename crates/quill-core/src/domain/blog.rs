use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Author, Comment};

/// Blog entity - a published post with its likes and comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// Rich text body (HTML).
    pub content: String,
    pub excerpt: String,
    pub cover_image_url: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    /// Set at creation; no mutation touches it afterwards.
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub likes: u64,
    pub comments: Vec<Comment>,
    /// Estimated reading time in minutes.
    pub read_time: u32,
}

/// A blog before the store has assigned id, timestamps and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image_url: String,
    pub author: Author,
    pub tags: Vec<String>,
    pub read_time: u32,
}

impl Blog {
    /// Create a new blog from a draft with generated ID and timestamps.
    pub fn from_draft(draft: BlogDraft) -> Self {
        let now = Utc::now();
        Self {
            id: format!("blog-{}", Uuid::new_v4()),
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            cover_image_url: draft.cover_image_url,
            author: draft.author,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
            likes: 0,
            comments: Vec::new(),
            read_time: draft.read_time,
        }
    }

    /// Whether the blog carries `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BlogDraft {
        BlogDraft {
            title: "T".to_string(),
            content: "<p>c</p>".to_string(),
            excerpt: "c...".to_string(),
            cover_image_url: "u".to_string(),
            author: Author::new("user-1", "Alex Johnson", "avatar"),
            tags: vec!["x".to_string()],
            read_time: 1,
        }
    }

    #[test]
    fn test_from_draft_initialises_counters() {
        let blog = Blog::from_draft(draft());

        assert!(blog.id.starts_with("blog-"));
        assert_eq!(blog.likes, 0);
        assert!(blog.comments.is_empty());
        assert_eq!(blog.created_at, blog.updated_at);
        assert_eq!(blog.title, "T");
        assert!(blog.has_tag("x"));
    }

    #[test]
    fn test_from_draft_ids_are_unique() {
        let a = Blog::from_draft(draft());
        let b = Blog::from_draft(draft());
        assert_ne!(a.id, b.id);
    }
}
