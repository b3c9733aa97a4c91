//! Domain entities - the core business objects.

mod author;
mod blog;
mod comment;
mod identity;

pub use author::Author;
pub use blog::{Blog, BlogDraft};
pub use comment::{Comment, CommentDraft};
pub use identity::Identity;
