//! Application configuration loaded from environment variables.

use std::env;

/// Which identity provider backs sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityConfig {
    /// Every sign-in succeeds as the demo user.
    Mock,
    /// One account checked against an Argon2 hash.
    Credentials(AccountConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: String,
    pub password_hash: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Start from the bundled posts instead of an empty store.
    pub seed_blogs: bool,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_blogs: env::var("SEED_BLOGS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            identity: Self::parse_identity(),
        }
    }

    /// IDENTITY_PROVIDER=mock|credentials
    /// The credentials provider needs ACCOUNT_EMAIL and ACCOUNT_PASSWORD_HASH;
    /// without them it falls back to the mock.
    fn parse_identity() -> IdentityConfig {
        let provider = env::var("IDENTITY_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        if !provider.eq_ignore_ascii_case("credentials") {
            return IdentityConfig::Mock;
        }

        match (env::var("ACCOUNT_EMAIL"), env::var("ACCOUNT_PASSWORD_HASH")) {
            (Ok(email), Ok(password_hash)) => IdentityConfig::Credentials(AccountConfig {
                id: env::var("ACCOUNT_ID").unwrap_or_else(|_| "user-1".to_string()),
                name: env::var("ACCOUNT_NAME").ok(),
                email,
                avatar_url: env::var("ACCOUNT_AVATAR_URL").unwrap_or_default(),
                password_hash,
            }),
            _ => {
                tracing::warn!(
                    "IDENTITY_PROVIDER=credentials needs ACCOUNT_EMAIL and ACCOUNT_PASSWORD_HASH. Using mock sign-in."
                );
                IdentityConfig::Mock
            }
        }
    }
}
