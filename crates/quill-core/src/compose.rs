//! Turning submitted forms into drafts.
//!
//! The store accepts any draft. Required fields, tag limits and the derived
//! excerpt/read time are settled here, before anything reaches it.

use serde::{Deserialize, Serialize};

use crate::domain::{Author, Blog, BlogDraft, CommentDraft, Identity};
use crate::error::DomainError;

/// Maximum number of tags kept on a post.
pub const MAX_TAGS: usize = 5;

/// Characters of plain text kept in a derived excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Characters of content counted as one minute of reading.
pub const CHARS_PER_MINUTE: usize = 1000;

pub const ANONYMOUS_NAME: &str = "Anonymous";
pub const DEFAULT_AVATAR_URL: &str = "https://randomuser.me/api/portraits/lego/1.jpg";

/// The "write a blog" form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Validate a blog form and build the draft authored by `identity`.
pub fn compose_blog(form: BlogForm, identity: &Identity) -> Result<BlogDraft, DomainError> {
    let missing: Vec<String> = [
        ("title", &form.title),
        ("content", &form.content),
        ("cover_image_url", &form.cover_image_url),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| format!("{field} is required"))
    .collect();

    if !missing.is_empty() {
        return Err(DomainError::Validation(missing));
    }

    Ok(BlogDraft {
        excerpt: excerpt(&form.content),
        read_time: read_time(&form.content),
        tags: normalize_tags(form.tags),
        author: author_of(identity),
        title: form.title,
        content: form.content,
        cover_image_url: form.cover_image_url,
    })
}

/// Validate comment text and build the draft authored by `identity`.
pub fn compose_comment(content: &str, identity: &Identity) -> Result<CommentDraft, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation(vec![
            "content is required".to_string(),
        ]));
    }

    Ok(CommentDraft {
        author: author_of(identity),
        content: content.to_string(),
    })
}

/// Blogs written by `identity`, in collection order.
pub fn profile_posts(blogs: &[Blog], identity: &Identity) -> Vec<Blog> {
    blogs
        .iter()
        .filter(|blog| blog.author.id == identity.id)
        .cloned()
        .collect()
}

/// The author record embedded in posts and comments by `identity`.
pub fn author_of(identity: &Identity) -> Author {
    let name = identity
        .display_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string());
    let avatar_url = if identity.avatar_url.is_empty() {
        DEFAULT_AVATAR_URL.to_string()
    } else {
        identity.avatar_url.clone()
    };

    Author::new(identity.id.clone(), name, avatar_url)
}

/// Trim, drop blanks and duplicates, keep the first [`MAX_TAGS`].
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || kept.iter().any(|t| t == tag) {
            continue;
        }
        if kept.len() == MAX_TAGS {
            break;
        }
        kept.push(tag.to_string());
    }
    kept
}

/// Plain-text prefix of the HTML content followed by an ellipsis.
pub fn excerpt(content: &str) -> String {
    let mut text: String = strip_tags(content).chars().take(EXCERPT_CHARS).collect();
    text.push_str("...");
    text
}

/// Reading time in whole minutes, never less than one.
pub fn read_time(content: &str) -> u32 {
    let minutes = content.chars().count().div_ceil(CHARS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Remove every `<...>` markup run. An unclosed `<` is kept as text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
