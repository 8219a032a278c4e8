/// Feed assembler - per-viewer reverse-chronological view over followed
/// authors' posts.
use crate::db::{follow_repo, post_repo};
use crate::error::Result;
use crate::models::{Page, Post};
use crate::pagination::ResolvedPage;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Posts authored by accounts the viewer follows, newest first with a
    /// descending-id tie-break so page boundaries are deterministic.
    ///
    /// The follow set is re-read on every call; there is no staleness
    /// window here. Pages past the end come back empty, and a viewer who
    /// follows nobody gets an empty feed rather than all posts.
    pub async fn get_feed(&self, viewer_id: Uuid, page: ResolvedPage) -> Result<Page<Post>> {
        let author_ids = follow_repo::following_ids(&self.pool, viewer_id).await?;

        if author_ids.is_empty() {
            return Ok(Page {
                items: Vec::new(),
                page: page.page,
                page_size: page.page_size,
                total: 0,
            });
        }

        let items =
            post_repo::find_posts_by_authors(&self.pool, &author_ids, page.limit(), page.offset())
                .await?;
        let total = post_repo::count_posts_by_authors(&self.pool, &author_ids).await?;

        Ok(Page {
            items,
            page: page.page,
            page_size: page.page_size,
            total,
        })
    }
}
