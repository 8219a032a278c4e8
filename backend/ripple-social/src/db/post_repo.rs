use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, author_id, title, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, author_id, title, content, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(author_id)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List posts, newest first, optionally filtered by a case-insensitive
/// substring match on title or content
pub async fn list_posts(
    pool: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, created_at
        FROM posts
        WHERE $1::text IS NULL
           OR title ILIKE '%' || $1 || '%'
           OR content ILIKE '%' || $1 || '%'
        ORDER BY created_at DESC, id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count posts matching the optional search filter
pub async fn count_posts(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM posts
        WHERE $1::text IS NULL
           OR title ILIKE '%' || $1 || '%'
           OR content ILIKE '%' || $1 || '%'
        "#,
    )
    .bind(search)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// List posts authored by any of the given users, newest first with a
/// descending-id tie-break for stable page boundaries
pub async fn find_posts_by_authors(
    pool: &PgPool,
    author_ids: &[Uuid],
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, created_at
        FROM posts
        WHERE author_id = ANY($1)
        ORDER BY created_at DESC, id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(author_ids)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count posts authored by any of the given users
pub async fn count_posts_by_authors(
    pool: &PgPool,
    author_ids: &[Uuid],
) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM posts WHERE author_id = ANY($1)
        "#,
    )
    .bind(author_ids)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Update a post's title and content. The author column is never touched.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2
        WHERE id = $3
        RETURNING id, author_id, title, content, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post; comments cascade at the database level
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
