//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::BlogFilter;
use quill_core::compose::BlogForm;
use quill_core::domain::{Blog, Identity};
use quill_core::ports::Credentials;

/// Request to publish a new blog.
pub type CreateBlogRequest = BlogForm;

/// Query string of `GET /api/blogs`.
///
/// `tags` and `authors` repeat once per selected value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

impl BlogQuery {
    pub fn into_filter(self) -> BlogFilter {
        BlogFilter::new()
            .with_search(self.q.unwrap_or_default())
            .with_tags(self.tags)
            .with_authors(self.authors)
    }
}

impl FromIterator<(String, String)> for BlogQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => query.q = Some(value),
                _ if value.is_empty() => {}
                "tags" => query.tags.push(value),
                "authors" => query.authors.push(value),
                _ => {}
            }
        }
        query
    }
}

/// Request to comment on a blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<SignInRequest> for Credentials {
    fn from(req: SignInRequest) -> Self {
        Credentials::new(req.email, req.password)
    }
}

/// Filtered listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
    /// Size of the whole collection before filtering.
    pub total: usize,
    pub filtered: bool,
}

/// Choices offered by the filter panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub id: String,
    pub likes: u64,
}

/// Current sign-in state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub signed_in: bool,
    pub identity: Option<Identity>,
}

/// The signed-in user with the posts they wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub identity: Identity,
    pub post_count: usize,
    pub total_likes: u64,
    pub posts: Vec<Blog>,
}

impl ProfileResponse {
    pub fn new(identity: Identity, posts: Vec<Blog>) -> Self {
        Self {
            identity,
            post_count: posts.len(),
            total_likes: posts.iter().map(|post| post.likes).sum(),
            posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> BlogQuery {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_collects_repeated_keys() {
        let filter = pairs(&[
            ("tags", "React"),
            ("tags", "C, C++"),
            ("tags", ""),
            ("authors", "Emily Rodriguez"),
            ("page", "2"),
        ])
        .into_filter();

        assert_eq!(filter.tags, vec!["React", "C, C++"]);
        assert_eq!(filter.authors, vec!["Emily Rodriguez"]);
        assert!(filter.search.is_empty());
    }

    #[test]
    fn test_query_keeps_search_text_verbatim() {
        let filter = pairs(&[("q", "  react ")]).into_filter();
        assert_eq!(filter.search, "  react ");

        let filter = pairs(&[("q", " ")]).into_filter();
        assert!(filter.is_active());
    }

    #[test]
    fn test_empty_query_is_inactive_filter() {
        assert!(!BlogQuery::default().into_filter().is_active());
    }

    #[test]
    fn test_sign_in_request_tolerates_missing_fields() {
        let req: SignInRequest = serde_json::from_str("{}").unwrap();
        let credentials = Credentials::from(req);
        assert!(credentials.email.is_empty());
    }
}
