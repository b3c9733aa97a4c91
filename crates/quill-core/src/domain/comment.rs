use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;

/// Comment entity - append-only child of a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment before the store has assigned its id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub author: Author,
    pub content: String,
}

impl Comment {
    /// Create a comment from a draft with a generated ID and the current time.
    pub fn from_draft(draft: CommentDraft) -> Self {
        Self {
            id: format!("comment-{}", Uuid::new_v4()),
            author: draft.author,
            content: draft.content,
            created_at: Utc::now(),
        }
    }
}
