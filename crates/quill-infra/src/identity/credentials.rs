//! Credential-checking identity provider backed by an Argon2 hash.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Identity;
use quill_core::ports::{AuthError, Credentials, IdentityProvider};

/// The single account this provider accepts.
#[derive(Debug, Clone)]
pub struct Account {
    pub identity: Identity,
    /// Argon2 hash in PHC string format.
    pub password_hash: String,
}

impl Account {
    /// Build an account by hashing `password`.
    pub fn with_password(identity: Identity, password: &str) -> Result<Self, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            identity,
            password_hash,
        })
    }
}

/// Signs in only when email and password match the configured account.
pub struct CredentialIdentityProvider {
    argon2: Argon2<'static>,
    account: Account,
    current: RwLock<Option<Identity>>,
}

impl CredentialIdentityProvider {
    pub fn new(account: Account) -> Self {
        Self {
            argon2: Argon2::default(),
            account,
            current: RwLock::new(None),
        }
    }

    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        let email_matches = self
            .account
            .identity
            .email
            .as_deref()
            .is_some_and(|email| email.eq_ignore_ascii_case(credentials.email.trim()));
        if !email_matches {
            return Ok(false);
        }

        let parsed_hash = PasswordHash::new(&self.account.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(credentials.password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[async_trait]
impl IdentityProvider for CredentialIdentityProvider {
    async fn current_identity(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        if !self.verify(&credentials)? {
            tracing::warn!(email = %credentials.email, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = self.account.identity.clone();
        *self.current.write().await = Some(identity.clone());
        tracing::info!(user_id = %identity.id, "Signed in");
        Ok(identity)
    }

    async fn sign_out(&self) {
        if let Some(identity) = self.current.write().await.take() {
            tracing::info!(user_id = %identity.id, "Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> CredentialIdentityProvider {
        let identity = Identity {
            id: "user-7".to_string(),
            display_name: Some("Sophia Garcia".to_string()),
            avatar_url: String::new(),
            email: Some("sophia@example.com".to_string()),
            member_since: None,
        };
        let account = Account::with_password(identity, "secure_password_123").unwrap();
        CredentialIdentityProvider::new(account)
    }

    #[tokio::test]
    async fn test_correct_password_signs_in() {
        let provider = provider();

        let identity = provider
            .sign_in(Credentials::new("Sophia@example.com", "secure_password_123"))
            .await
            .unwrap();

        assert_eq!(identity.id, "user-7");
        assert!(provider.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let provider = provider();

        let result = provider
            .sign_in(Credentials::new("sophia@example.com", "wrong_password"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!provider.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_unknown_email_is_rejected() {
        let provider = provider();

        let result = provider
            .sign_in(Credentials::new("alex@example.com", "secure_password_123"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_a_hashing_error() {
        let mut account = provider().account;
        account.password_hash = "not-a-phc-string".to_string();
        let provider = CredentialIdentityProvider::new(account);

        let result = provider
            .sign_in(Credentials::new("sophia@example.com", "secure_password_123"))
            .await;

        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
