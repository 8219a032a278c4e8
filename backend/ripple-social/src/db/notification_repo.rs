use crate::models::{Notification, NotificationTarget};
use sqlx::PgPool;
use uuid::Uuid;

/// Append a notification to the log
pub async fn insert_notification(
    pool: &PgPool,
    recipient_id: Uuid,
    actor_id: Uuid,
    verb: &str,
    target: NotificationTarget,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO notifications (id, recipient_id, actor_id, verb, target_kind, target_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(recipient_id)
    .bind(actor_id)
    .bind(verb)
    .bind(target.kind.as_str())
    .bind(target.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// List notifications for a recipient: unread first, then newest first.
pub async fn find_notifications_for(
    pool: &PgPool,
    recipient_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Notification>, sqlx::Error> {
    let notifications = sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, recipient_id, actor_id, verb, target_kind, target_id, is_read, created_at
        FROM notifications
        WHERE recipient_id = $1
        ORDER BY is_read ASC, created_at DESC, id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(recipient_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

/// Count notifications for a recipient
pub async fn count_notifications_for(
    pool: &PgPool,
    recipient_id: Uuid,
) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM notifications WHERE recipient_id = $1
        "#,
    )
    .bind(recipient_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Bulk-flip every unread notification for a recipient; returns rows flipped.
/// Running this twice is harmless: the second pass matches zero rows.
pub async fn mark_all_read(pool: &PgPool, recipient_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET is_read = TRUE
        WHERE recipient_id = $1 AND is_read = FALSE
        "#,
    )
    .bind(recipient_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
