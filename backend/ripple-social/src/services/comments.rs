/// Comment service - comments on posts, owner-gated mutation.
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, NotificationTarget, Page};
use crate::pagination::ResolvedPage;
use crate::services::notifications::{NotificationService, VERB_COMMENTED_POST};
use crate::services::require_non_empty;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
    notifications: NotificationService,
}

impl CommentService {
    pub fn new(pool: PgPool, notifications: NotificationService) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Comment on a post. A comment on someone else's post fans out a
    /// best-effort notification to the post author.
    pub async fn create_comment(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let content = require_non_empty("content", content)?;

        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let comment = comment_repo::create_comment(&self.pool, post_id, viewer_id, content).await?;

        self.notifications
            .emit(
                post.author_id,
                viewer_id,
                VERB_COMMENTED_POST,
                NotificationTarget::comment(comment.id),
            )
            .await;

        Ok(comment)
    }

    pub async fn list_for_post(&self, post_id: Uuid, page: ResolvedPage) -> Result<Page<Comment>> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let items =
            comment_repo::find_comments_by_post(&self.pool, post_id, page.limit(), page.offset())
                .await?;
        let total = comment_repo::count_comments_by_post(&self.pool, post_id).await?;

        Ok(Page {
            items,
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }

    /// Update comment content (author only)
    pub async fn update_comment(
        &self,
        viewer_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let content = require_non_empty("content", content)?;

        let existing = self.require_comment(comment_id).await?;
        if existing.author_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author may edit this comment".to_string(),
            ));
        }

        let updated = comment_repo::update_comment(&self.pool, comment_id, content)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        Ok(updated)
    }

    /// Delete a comment (author only)
    pub async fn delete_comment(&self, viewer_id: Uuid, comment_id: Uuid) -> Result<()> {
        let existing = self.require_comment(comment_id).await?;
        if existing.author_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author may delete this comment".to_string(),
            ));
        }

        comment_repo::delete_comment(&self.pool, comment_id).await?;
        Ok(())
    }

    async fn require_comment(&self, comment_id: Uuid) -> Result<Comment> {
        comment_repo::find_comment_by_id(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }
}
