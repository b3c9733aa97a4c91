//! The fixed dataset a fresh store starts from.

use quill_core::domain::Blog;

const SEED_JSON: &str = include_str!("seed_blogs.json");

/// Failure to decode the embedded dataset.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid seed data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode the embedded seed posts in their listed order.
pub fn seed_blogs() -> Result<Vec<Blog>, SeedError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
