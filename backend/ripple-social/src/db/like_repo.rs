use crate::models::Like;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a like for (user, post); returns the new row, or None if the
/// pair was already liked.
///
/// The unique constraint on (user_id, post_id) is the only duplicate guard:
/// under a concurrent double-submission exactly one insert wins and the
/// loser sees no returned row instead of a duplicate-key error. There is
/// deliberately no existence pre-check here.
pub async fn insert_like(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    let inserted = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (id, user_id, post_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, post_id) DO NOTHING
        RETURNING id, user_id, post_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted)
}

/// Delete a like; returns true if a row was removed.
pub async fn delete_like(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE user_id = $1 AND post_id = $2
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Get like count for a post
pub async fn count_likes_for_post(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM likes WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
