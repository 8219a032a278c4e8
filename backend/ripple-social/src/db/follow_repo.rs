use crate::models::Follow;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a follow edge; returns the new edge, or None if it already
/// existed (re-following is a no-op).
pub async fn insert_follow(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<Option<Follow>, sqlx::Error> {
    let inserted = sqlx::query_as::<_, Follow>(
        r#"
        INSERT INTO follows (id, follower_id, followee_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (follower_id, followee_id) DO NOTHING
        RETURNING id, follower_id, followee_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(follower_id)
    .bind(followee_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted)
}

/// Delete a follow edge; returns true if an edge was removed.
pub async fn delete_follow(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM follows
        WHERE follower_id = $1 AND followee_id = $2
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// IDs of every account the given user follows.
///
/// The feed query filters on this explicit id list, re-read on every call.
pub async fn following_ids(pool: &PgPool, follower_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let ids: Vec<Uuid> = sqlx::query_scalar(
        r#"
        SELECT followee_id FROM follows WHERE follower_id = $1
        "#,
    )
    .bind(follower_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}
