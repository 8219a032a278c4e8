use crate::error::Result;
use crate::middleware::UserId;
use crate::pagination::PageParams;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
}

impl ListPostsQuery {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Create a new post
///
/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let post = service.create_post(viewer.0, &req.title, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

/// List posts, newest first; ?search= narrows by title/content
///
/// GET /api/v1/posts
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let page = service
        .list_posts(query.search.as_deref(), query.page_params().resolve())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get a post with engagement counts
///
/// GET /api/v1/posts/{id}
pub async fn get_post(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let detail = service.get_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// Update a post (author only)
///
/// PUT /api/v1/posts/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    let post = service
        .update_post(viewer.0, path.into_inner(), &req.title, &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post (author only)
///
/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(pool.get_ref().clone());
    service.delete_post(viewer.0, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
