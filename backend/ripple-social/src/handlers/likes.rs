use crate::error::Result;
use crate::middleware::UserId;
use crate::services::{EngagementService, NotificationService};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

fn engagement_service(pool: &PgPool) -> EngagementService {
    EngagementService::new(pool.clone(), NotificationService::new(pool.clone()))
}

/// Like a post
///
/// POST /api/v1/posts/{id}/like
pub async fn like(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let outcome = engagement_service(pool.get_ref())
        .like(viewer.0, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Remove a like from a post
///
/// DELETE /api/v1/posts/{id}/like
pub async fn unlike(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let removed = engagement_service(pool.get_ref())
        .unlike(viewer.0, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": removed })))
}
