use crate::error::Result;
use crate::middleware::UserId;
use crate::services::{FollowService, NotificationService};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

fn follow_service(pool: &PgPool) -> FollowService {
    FollowService::new(pool.clone(), NotificationService::new(pool.clone()))
}

/// Follow a user
///
/// POST /api/v1/users/{id}/follow
pub async fn follow(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let outcome = follow_service(pool.get_ref())
        .follow(viewer.0, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Unfollow a user
///
/// DELETE /api/v1/users/{id}/follow
pub async fn unfollow(
    pool: web::Data<PgPool>,
    viewer: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let outcome = follow_service(pool.get_ref())
        .unfollow(viewer.0, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}
