/// Like ledger - idempotent like/unlike keyed by (user, post).
use crate::db::{like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::NotificationTarget;
use crate::services::notifications::{NotificationService, VERB_LIKED_POST};
use sqlx::PgPool;
use uuid::Uuid;

/// Result of a like call
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct LikeOutcome {
    pub already_liked: bool,
}

#[derive(Clone)]
pub struct EngagementService {
    pool: PgPool,
    notifications: NotificationService,
}

impl EngagementService {
    pub fn new(pool: PgPool, notifications: NotificationService) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Like a post.
    ///
    /// Duplicate submissions, concurrent or sequential, resolve through the
    /// (user, post) unique constraint: the loser observes
    /// `already_liked = true`, never a duplicate-key error. Only a
    /// first-time like on someone else's post fans out a notification, and
    /// that fan-out may fail without failing the like.
    pub async fn like(&self, viewer_id: Uuid, post_id: Uuid) -> Result<LikeOutcome> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let created = like_repo::insert_like(&self.pool, viewer_id, post_id)
            .await?
            .is_some();

        if created {
            // NotificationService suppresses the self-like case itself.
            self.notifications
                .emit(
                    post.author_id,
                    viewer_id,
                    VERB_LIKED_POST,
                    NotificationTarget::post(post_id),
                )
                .await;
        }

        Ok(LikeOutcome {
            already_liked: !created,
        })
    }

    /// Remove a like; reports whether a record existed. Unliking a
    /// never-liked post is a no-op success.
    pub async fn unlike(&self, viewer_id: Uuid, post_id: Uuid) -> Result<bool> {
        let removed = like_repo::delete_like(&self.pool, viewer_id, post_id).await?;
        Ok(removed)
    }
}
