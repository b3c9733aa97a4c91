//! Blog handlers - browsing, writing, liking and commenting.

use actix_web::{HttpResponse, web};

use quill_core::DomainError;
use quill_core::compose::{compose_blog, compose_comment};
use quill_core::filter::{available_authors, available_tags};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    AddCommentRequest, BlogListResponse, BlogQuery, CreateBlogRequest, FacetsResponse,
    LikeResponse,
};

use crate::middleware::auth::SignedIn;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blogs?q=&tags=&authors=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> HttpResponse {
    let blogs = state.blogs.list().await;
    let filter = query.into_inner().into_iter().collect::<BlogQuery>().into_filter();

    HttpResponse::Ok().json(ApiResponse::ok(BlogListResponse {
        total: blogs.len(),
        filtered: filter.is_active(),
        blogs: filter.apply(blogs.iter()),
    }))
}

/// GET /api/blogs/featured
pub async fn featured(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(state.blogs.featured().await))
}

/// GET /api/blogs/facets
pub async fn facets(state: web::Data<AppState>) -> HttpResponse {
    let blogs = state.blogs.list().await;

    HttpResponse::Ok().json(ApiResponse::ok(FacetsResponse {
        tags: available_tags(&blogs),
        authors: available_authors(&blogs),
    }))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = state
        .blogs
        .get(&id)
        .await
        .ok_or_else(|| DomainError::blog_not_found(id.as_str()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blog)))
}

/// POST /api/blogs - Protected route
pub async fn create(
    state: web::Data<AppState>,
    identity: SignedIn,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let draft = compose_blog(body.into_inner(), &identity)?;
    let blog = state.blogs.create(draft).await;

    tracing::info!(blog_id = %blog.id, author = %blog.author.name, "Blog published");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        blog,
        "Blog published successfully!",
    )))
}

/// POST /api/blogs/{id}/like - Protected route
pub async fn like(
    state: web::Data<AppState>,
    _identity: SignedIn,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = state
        .blogs
        .like(&id)
        .await
        .ok_or_else(|| DomainError::blog_not_found(id.as_str()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(LikeResponse {
        id: blog.id,
        likes: blog.likes,
    })))
}

/// POST /api/blogs/{id}/comments - Protected route
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: SignedIn,
    path: web::Path<String>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = compose_comment(&body.content, &identity)?;
    let comment = state
        .blogs
        .add_comment(&id, draft)
        .await
        .ok_or_else(|| DomainError::blog_not_found(id.as_str()))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(comment)))
}
