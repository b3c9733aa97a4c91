//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod blog_store;
mod identity;

pub use blog_store::{BlogStore, FEATURED_COUNT};
pub use identity::{AuthError, Credentials, IdentityProvider};
