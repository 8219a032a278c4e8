use crate::error::Result;
use crate::services::UserService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub handle: String,
}

/// Create a new user
///
/// POST /api/v1/users
pub async fn create_user(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let service = UserService::new(pool.get_ref().clone());
    let user = service.create_user(&req.handle).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Get a user by ID
///
/// GET /api/v1/users/{id}
pub async fn get_user(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = UserService::new(pool.get_ref().clone());
    let user = service.get_user(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
