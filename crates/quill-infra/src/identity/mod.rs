//! Identity provider implementations.

mod mock;

#[cfg(feature = "auth")]
mod credentials;

pub use mock::MockIdentityProvider;

#[cfg(feature = "auth")]
pub use credentials::{Account, CredentialIdentityProvider};
