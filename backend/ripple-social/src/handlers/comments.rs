use crate::error::Result;
use crate::middleware::UserId;
use crate::pagination::PageParams;
use crate::services::{CommentService, NotificationService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub content: String,
}

fn comment_service(pool: &PgPool) -> CommentService {
    CommentService::new(pool.clone(), NotificationService::new(pool.clone()))
}

/// Comment on a post
///
/// POST /api/v1/posts/{id}/comments
pub async fn create_comment(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
    req: web::Json<CommentBody>,
) -> Result<HttpResponse> {
    let comment = comment_service(pool.get_ref())
        .create_comment(viewer.0, path.into_inner(), &req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// List comments for a post, newest first
///
/// GET /api/v1/posts/{id}/comments
pub async fn list_comments(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let page = comment_service(pool.get_ref())
        .list_for_post(path.into_inner(), query.resolve())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Update a comment (author only)
///
/// PUT /api/v1/comments/{id}
pub async fn update_comment(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
    req: web::Json<CommentBody>,
) -> Result<HttpResponse> {
    let comment = comment_service(pool.get_ref())
        .update_comment(viewer.0, path.into_inner(), &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment (author only)
///
/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    comment_service(pool.get_ref())
        .delete_comment(viewer.0, path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
