//! Identity provider port.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::Identity;

/// Credentials submitted on sign-in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Holds the one identity of the current session.
///
/// Implementations decide how credentials are checked; everything downstream
/// only sees the resulting [`Identity`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in identity, if any.
    async fn current_identity(&self) -> Option<Identity>;

    /// Sign in, replacing any previous identity.
    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError>;

    /// Clear the current identity. Signing out twice is harmless.
    async fn sign_out(&self);

    async fn is_signed_in(&self) -> bool {
        self.current_identity().await.is_some()
    }

    /// The current identity, or [`AuthError::SignInRequired`].
    async fn require_identity(&self) -> Result<Identity, AuthError> {
        self.current_identity()
            .await
            .ok_or(AuthError::SignInRequired)
    }
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Sign-in required")]
    SignInRequired,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
