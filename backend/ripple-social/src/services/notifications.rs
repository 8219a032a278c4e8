/// Notification sink - append-only fan-out log with best-effort delivery.
use crate::db::notification_repo;
use crate::error::Result;
use crate::models::{Notification, NotificationTarget, Page};
use crate::pagination::ResolvedPage;
use sqlx::PgPool;
use uuid::Uuid;

pub const VERB_LIKED_POST: &str = "liked your post";
pub const VERB_COMMENTED_POST: &str = "commented on your post";
pub const VERB_STARTED_FOLLOWING: &str = "started following you";

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a notification, best-effort.
    ///
    /// Self-directed events are suppressed before any write. A failed write
    /// is logged and dropped so the triggering action never fails on it.
    /// Returns true only if a record was actually written.
    pub async fn emit(
        &self,
        recipient_id: Uuid,
        actor_id: Uuid,
        verb: &str,
        target: NotificationTarget,
    ) -> bool {
        if recipient_id == actor_id {
            return false;
        }

        match notification_repo::insert_notification(
            &self.pool,
            recipient_id,
            actor_id,
            verb,
            target,
        )
        .await
        {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    %recipient_id,
                    %actor_id,
                    verb,
                    "failed to write notification, dropping: {}",
                    err
                );
                false
            }
        }
    }

    /// Notifications for a recipient: unread first, then newest first.
    pub async fn list_for(&self, recipient_id: Uuid, page: ResolvedPage) -> Result<Page<Notification>> {
        let items = notification_repo::find_notifications_for(
            &self.pool,
            recipient_id,
            page.limit(),
            page.offset(),
        )
        .await?;
        let total = notification_repo::count_notifications_for(&self.pool, recipient_id).await?;

        Ok(Page {
            items,
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }

    /// Bulk-flip unread notifications for a recipient; returns rows flipped.
    pub async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64> {
        let flipped = notification_repo::mark_all_read(&self.pool, recipient_id).await?;
        Ok(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetKind;

    fn lazy_service() -> NotificationService {
        // connect_lazy never opens a connection; fine for pre-query paths
        let pool = PgPool::connect_lazy("postgres://localhost/ripple_test").unwrap();
        NotificationService::new(pool)
    }

    #[tokio::test]
    async fn test_self_directed_emit_is_suppressed() {
        let service = lazy_service();
        let user = Uuid::new_v4();

        let emitted = service
            .emit(
                user,
                user,
                VERB_LIKED_POST,
                NotificationTarget {
                    kind: TargetKind::Post,
                    id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(!emitted);
    }

    #[tokio::test]
    async fn test_emit_failure_is_swallowed() {
        // No database behind the lazy pool, so the write fails; emit must
        // report false instead of propagating the error.
        let service = lazy_service();

        let emitted = service
            .emit(
                Uuid::new_v4(),
                Uuid::new_v4(),
                VERB_STARTED_FOLLOWING,
                NotificationTarget {
                    kind: TargetKind::User,
                    id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(!emitted);
    }
}
