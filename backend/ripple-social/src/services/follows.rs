/// Follow graph - directed edges between accounts.
use crate::db::{follow_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::NotificationTarget;
use crate::services::notifications::{NotificationService, VERB_STARTED_FOLLOWING};
use sqlx::PgPool;
use uuid::Uuid;

/// Result of a follow/unfollow call
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct FollowOutcome {
    /// Whether the edge set actually changed
    pub changed: bool,
}

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
    notifications: NotificationService,
}

impl FollowService {
    pub fn new(pool: PgPool, notifications: NotificationService) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Add a follow edge from viewer to target.
    ///
    /// Idempotent: re-following is a no-op success. A brand-new edge fans
    /// out a best-effort notification to the target.
    pub async fn follow(&self, viewer_id: Uuid, target_id: Uuid) -> Result<FollowOutcome> {
        self.check_target(viewer_id, target_id, "follow").await?;

        let created = follow_repo::insert_follow(&self.pool, viewer_id, target_id)
            .await?
            .is_some();

        if created {
            self.notifications
                .emit(
                    target_id,
                    viewer_id,
                    VERB_STARTED_FOLLOWING,
                    NotificationTarget::user(viewer_id),
                )
                .await;
        }

        Ok(FollowOutcome { changed: created })
    }

    /// Remove the follow edge from viewer to target.
    ///
    /// Removing a non-existent edge is a no-op success; the outcome reports
    /// that nothing changed.
    pub async fn unfollow(&self, viewer_id: Uuid, target_id: Uuid) -> Result<FollowOutcome> {
        self.check_target(viewer_id, target_id, "unfollow").await?;

        let removed = follow_repo::delete_follow(&self.pool, viewer_id, target_id).await?;
        Ok(FollowOutcome { changed: removed })
    }

    async fn check_target(&self, viewer_id: Uuid, target_id: Uuid, action: &str) -> Result<()> {
        if viewer_id == target_id {
            return Err(AppError::SelfReference(format!(
                "you cannot {} yourself",
                action
            )));
        }
        if !user_repo::user_exists(&self.pool, target_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
