use crate::error::Result;
use crate::middleware::UserId;
use crate::pagination::PageParams;
use crate::services::FeedService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// The viewer's home feed: posts from followed accounts, newest first
///
/// GET /api/v1/feed
pub async fn get_feed(
    pool: web::Data<PgPool>,
    viewer: UserId,
    query: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let service = FeedService::new(pool.get_ref().clone());
    let page = service.get_feed(viewer.0, query.resolve()).await?;

    Ok(HttpResponse::Ok().json(page))
}
