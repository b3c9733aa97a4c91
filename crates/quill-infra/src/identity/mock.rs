//! Mock identity provider - every sign-in succeeds as the same user.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::Identity;
use quill_core::ports::{AuthError, Credentials, IdentityProvider};

/// Signs in as a fixed demo user regardless of the submitted credentials.
///
/// Starts signed out. State lives only as long as the provider.
pub struct MockIdentityProvider {
    user: Identity,
    current: RwLock<Option<Identity>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::with_user(Self::demo_user())
    }

    /// A provider that signs in as `user`.
    pub fn with_user(user: Identity) -> Self {
        Self {
            user,
            current: RwLock::new(None),
        }
    }

    fn demo_user() -> Identity {
        Identity {
            id: "user-1".to_string(),
            display_name: Some("Alex Johnson".to_string()),
            avatar_url: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            email: Some("alex.johnson@example.com".to_string()),
            member_since: Some(Utc::now()),
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_identity(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    async fn sign_in(&self, _credentials: Credentials) -> Result<Identity, AuthError> {
        let mut current = self.current.write().await;
        *current = Some(self.user.clone());
        tracing::info!(user_id = %self.user.id, "Signed in (mock)");
        Ok(self.user.clone())
    }

    async fn sign_out(&self) {
        let mut current = self.current.write().await;
        if let Some(identity) = current.take() {
            tracing::info!(user_id = %identity.id, "Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_signed_out() {
        let provider = MockIdentityProvider::new();
        assert!(!provider.is_signed_in().await);
        assert!(provider.current_identity().await.is_none());
        assert!(matches!(
            provider.require_identity().await,
            Err(AuthError::SignInRequired)
        ));
    }

    #[tokio::test]
    async fn test_any_credentials_sign_in() {
        let provider = MockIdentityProvider::new();

        let identity = provider.sign_in(Credentials::default()).await.unwrap();

        assert_eq!(identity.id, "user-1");
        assert_eq!(identity.display_name.as_deref(), Some("Alex Johnson"));
        assert!(provider.is_signed_in().await);
        assert_eq!(provider.current_identity().await, Some(identity));
    }

    #[tokio::test]
    async fn test_sign_out_clears_identity() {
        let provider = MockIdentityProvider::new();
        provider
            .sign_in(Credentials::new("who@example.com", "anything"))
            .await
            .unwrap();

        provider.sign_out().await;
        assert!(!provider.is_signed_in().await);

        // Second sign-out is a no-op.
        provider.sign_out().await;
        assert!(provider.current_identity().await.is_none());
    }
}
