use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{Notification, NotificationTarget, Page};
use crate::pagination::PageParams;
use crate::services::NotificationService;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Notification as presented to clients: the raw target columns collapse
/// into one typed (kind, id) reference.
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub verb: String,
    pub target: Option<NotificationTarget>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        let target = notification.target();
        Self {
            id: notification.id,
            recipient_id: notification.recipient_id,
            actor_id: notification.actor_id,
            verb: notification.verb,
            target,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

/// List the viewer's notifications, unread first then newest first
///
/// GET /api/v1/notifications
pub async fn list_notifications(
    pool: web::Data<PgPool>,
    viewer: UserId,
    query: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let service = NotificationService::new(pool.get_ref().clone());
    let page = service.list_for(viewer.0, query.resolve()).await?;

    let page = Page {
        items: page
            .items
            .into_iter()
            .map(NotificationResponse::from)
            .collect::<Vec<_>>(),
        page: page.page,
        page_size: page.page_size,
        total: page.total,
    };

    Ok(HttpResponse::Ok().json(page))
}

/// Mark every unread notification for the viewer as read
///
/// POST /api/v1/notifications/mark-all-read
pub async fn mark_all_read(pool: web::Data<PgPool>, viewer: UserId) -> Result<HttpResponse> {
    let service = NotificationService::new(pool.get_ref().clone());
    let updated = service.mark_all_read(viewer.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "detail": "All notifications marked as read.",
        "updated": updated,
    })))
}
