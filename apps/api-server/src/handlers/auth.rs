//! Sign-in handlers.

use actix_web::{HttpResponse, web};

use quill_shared::ApiResponse;
use quill_shared::dto::{SessionResponse, SignInRequest};

use crate::middleware::auth::SignedIn;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/sign-in
pub async fn sign_in(
    state: web::Data<AppState>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    let identity = state.identity.sign_in(body.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SessionResponse {
        signed_in: true,
        identity: Some(identity),
    })))
}

/// POST /api/auth/sign-out
pub async fn sign_out(state: web::Data<AppState>) -> HttpResponse {
    state.identity.sign_out().await;

    HttpResponse::Ok().json(ApiResponse::ok(SessionResponse {
        signed_in: false,
        identity: None,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: SignedIn) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(identity.into_inner())))
}
