/// Post service - creation, retrieval, owner-gated mutation.
use crate::db::{comment_repo, like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{Page, Post};
use crate::pagination::ResolvedPage;
use crate::services::require_non_empty;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A post together with its engagement counts
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub like_count: i64,
    pub comment_count: i64,
}

#[derive(Clone)]
pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_post(&self, viewer_id: Uuid, title: &str, content: &str) -> Result<Post> {
        let title = require_non_empty("title", title)?;
        let content = require_non_empty("content", content)?;

        let post = post_repo::create_post(&self.pool, viewer_id, title, content).await?;
        Ok(post)
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<PostDetail> {
        let post = self.require_post(post_id).await?;
        let like_count = like_repo::count_likes_for_post(&self.pool, post_id).await?;
        let comment_count = comment_repo::count_comments_by_post(&self.pool, post_id).await?;

        Ok(PostDetail {
            post,
            like_count,
            comment_count,
        })
    }

    /// List posts newest first, optionally narrowed by a title/content search.
    pub async fn list_posts(
        &self,
        search: Option<&str>,
        page: ResolvedPage,
    ) -> Result<Page<Post>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let items =
            post_repo::list_posts(&self.pool, search, page.limit(), page.offset()).await?;
        let total = post_repo::count_posts(&self.pool, search).await?;

        Ok(Page {
            items,
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }

    /// Update title and content. Only the author may mutate; the author
    /// column itself is immutable.
    pub async fn update_post(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let title = require_non_empty("title", title)?;
        let content = require_non_empty("content", content)?;

        let existing = self.require_post(post_id).await?;
        if existing.author_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author may edit this post".to_string(),
            ));
        }

        let updated = post_repo::update_post(&self.pool, post_id, title, content)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        Ok(updated)
    }

    /// Delete a post (author only). Comments go with it via the FK cascade.
    pub async fn delete_post(&self, viewer_id: Uuid, post_id: Uuid) -> Result<()> {
        let existing = self.require_post(post_id).await?;
        if existing.author_id != viewer_id {
            return Err(AppError::Forbidden(
                "only the author may delete this post".to_string(),
            ));
        }

        post_repo::delete_post(&self.pool, post_id).await?;
        Ok(())
    }

    async fn require_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}
