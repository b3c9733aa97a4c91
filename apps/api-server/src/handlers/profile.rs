//! Profile of the signed-in user.

use actix_web::{HttpResponse, web};

use quill_core::compose::profile_posts;
use quill_shared::ApiResponse;
use quill_shared::dto::ProfileResponse;

use crate::middleware::auth::SignedIn;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/profile - Protected route
pub async fn profile(
    state: web::Data<AppState>,
    identity: SignedIn,
) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list().await;
    let posts = profile_posts(&blogs, &identity);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ProfileResponse::new(
        identity.into_inner(),
        posts,
    ))))
}
