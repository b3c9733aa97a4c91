//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the in-memory blog store and the identity providers.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Mock identity provider only
//! - `auth` - Argon2 credential-checking identity provider

pub mod identity;
pub mod store;

pub use identity::MockIdentityProvider;
pub use store::InMemoryBlogStore;

#[cfg(feature = "auth")]
pub use identity::{Account, CredentialIdentityProvider};
