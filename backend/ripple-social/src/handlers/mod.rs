/// HTTP request handlers - thin glue over the services layer.
pub mod comments;
pub mod feed;
pub mod follows;
pub mod likes;
pub mod notifications;
pub mod posts;
pub mod users;

use actix_web::{web, HttpResponse};

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Readiness probe: verifies the database answers
pub async fn ready(pool: web::Data<sqlx::PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().body("READY"),
        Err(err) => {
            tracing::warn!("readiness check failed: {}", err);
            HttpResponse::ServiceUnavailable().body("NOT READY")
        }
    }
}
