//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogStore, IdentityProvider};
use quill_infra::store::SeedError;
use quill_infra::{InMemoryBlogStore, MockIdentityProvider};

use crate::config::{AppConfig, IdentityConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Result<Self, SeedError> {
        let blogs = if config.seed_blogs {
            InMemoryBlogStore::seeded()?
        } else {
            tracing::info!("SEED_BLOGS disabled. Starting with an empty blog store.");
            InMemoryBlogStore::new()
        };

        let state = Self::from_parts(Arc::new(blogs), Self::identity_provider(&config.identity));
        tracing::info!("Application state initialized");
        Ok(state)
    }

    pub fn from_parts(blogs: Arc<dyn BlogStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { blogs, identity }
    }

    /// End the session. Called once the server has stopped.
    pub async fn shutdown(&self) {
        self.identity.sign_out().await;
        tracing::info!("Application state torn down");
    }

    #[cfg(feature = "auth")]
    fn identity_provider(config: &IdentityConfig) -> Arc<dyn IdentityProvider> {
        use quill_core::domain::Identity;
        use quill_infra::{Account, CredentialIdentityProvider};

        match config {
            IdentityConfig::Mock => Arc::new(MockIdentityProvider::new()),
            IdentityConfig::Credentials(account) => {
                tracing::info!(email = %account.email, "Using credential sign-in");
                Arc::new(CredentialIdentityProvider::new(Account {
                    identity: Identity {
                        id: account.id.clone(),
                        display_name: account.name.clone(),
                        avatar_url: account.avatar_url.clone(),
                        email: Some(account.email.clone()),
                        member_since: None,
                    },
                    password_hash: account.password_hash.clone(),
                }))
            }
        }
    }

    #[cfg(not(feature = "auth"))]
    fn identity_provider(config: &IdentityConfig) -> Arc<dyn IdentityProvider> {
        if matches!(config, IdentityConfig::Credentials(_)) {
            tracing::warn!("Running without auth feature - using mock sign-in");
        }
        Arc::new(MockIdentityProvider::new())
    }
}
