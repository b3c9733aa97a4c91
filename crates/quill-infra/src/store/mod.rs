//! Blog store implementations.

mod memory;
mod seed;

pub use memory::InMemoryBlogStore;
pub use seed::{SeedError, seed_blogs};
