//! Filter and search over the blog collection.
//!
//! A [`BlogFilter`] is a predicate set: free-text search, selected tags and
//! selected author names. Categories combine with AND, values inside a
//! category with OR. Filtering keeps the input order.

use serde::{Deserialize, Serialize};

use crate::domain::Blog;

/// Predicate set used to narrow the blog collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl BlogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Select the tag if unselected, otherwise deselect it.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    /// Select the author if unselected, otherwise deselect it.
    pub fn toggle_author(&mut self, author: &str) {
        toggle(&mut self.authors, author);
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.tags.clear();
        self.authors.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.tags.is_empty() || !self.authors.is_empty()
    }

    /// Whether a single blog passes every active predicate.
    pub fn matches(&self, blog: &Blog) -> bool {
        self.matches_search(blog) && self.matches_tags(blog) && self.matches_authors(blog)
    }

    /// Blogs that pass the filter, in input order.
    pub fn apply<'a, I>(&self, blogs: I) -> Vec<Blog>
    where
        I: IntoIterator<Item = &'a Blog>,
    {
        blogs
            .into_iter()
            .filter(|blog| self.matches(blog))
            .cloned()
            .collect()
    }

    fn matches_search(&self, blog: &Blog) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&blog.title, &blog.excerpt, &blog.content]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_tags(&self, blog: &Blog) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| blog.has_tag(tag))
    }

    fn matches_authors(&self, blog: &Blog) -> bool {
        self.authors.is_empty() || self.authors.contains(&blog.author.name)
    }
}

fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

/// Distinct tags across the collection, in first-seen order.
pub fn available_tags(blogs: &[Blog]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in blogs.iter().flat_map(|blog| &blog.tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Distinct author names across the collection, in first-seen order.
pub fn available_authors(blogs: &[Blog]) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for blog in blogs {
        if !authors.contains(&blog.author.name) {
            authors.push(blog.author.name.clone());
        }
    }
    authors
}
