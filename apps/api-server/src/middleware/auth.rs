//! Sign-in guard for protected routes.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use quill_core::domain::Identity;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Signed-in identity extractor.
///
/// Handlers that take this argument answer 401 while nobody is signed in:
/// ```ignore
/// async fn write(identity: SignedIn) -> impl Responder {
///     format!("Hello, {}!", identity.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SignedIn(pub Identity);

impl SignedIn {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl Deref for SignedIn {
    type Target = Identity;

    fn deref(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for SignedIn {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provider = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.identity.clone());

        Box::pin(async move {
            let Some(provider) = provider else {
                tracing::error!("AppState not found in app data");
                return Err(AppError::Internal("Server configuration error".to_string()));
            };

            let identity = provider.require_identity().await?;
            Ok(SignedIn(identity))
        })
    }
}
