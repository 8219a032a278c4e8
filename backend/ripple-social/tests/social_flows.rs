//! Integration tests: follow graph, like ledger, notifications, feed
//!
//! These tests require a running PostgreSQL instance; each case gets a
//! throwaway database with the crate migrations applied.
//! Run with: DATABASE_URL=postgres://... cargo test --test social_flows -- --ignored

use chrono::{TimeZone, Utc};
use ripple_social::models::{TargetKind, User};
use ripple_social::pagination::{PageParams, ResolvedPage};
use ripple_social::services::{
    EngagementService, FeedService, FollowService, NotificationService,
};
use sqlx::PgPool;
use uuid::Uuid;

fn first_page() -> ResolvedPage {
    PageParams {
        page: Some(1),
        page_size: Some(10),
    }
    .resolve()
}

fn page(n: u32) -> ResolvedPage {
    PageParams {
        page: Some(n),
        page_size: Some(10),
    }
    .resolve()
}

async fn create_user(pool: &PgPool, handle: &str) -> User {
    ripple_social::db::user_repo::create_user(pool, handle)
        .await
        .expect("Failed to create user")
}

/// Insert a post with a controlled timestamp so ordering fixtures are exact.
async fn insert_post_at(pool: &PgPool, author_id: Uuid, title: &str, at_secs: i64) -> Uuid {
    let post_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO posts (id, author_id, title, content, created_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(post_id)
    .bind(author_id)
    .bind(title)
    .bind(format!("body of {}", title))
    .bind(Utc.timestamp_opt(at_secs, 0).unwrap())
    .execute(pool)
    .await
    .expect("Failed to insert post");
    post_id
}

async fn count_rows(pool: &PgPool, sql: &str, id: Uuid) -> i64 {
    sqlx::query_scalar(sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn duplicate_like_stores_one_row_and_one_notification(pool: PgPool) {
    let notifications = NotificationService::new(pool.clone());
    let engagement = EngagementService::new(pool.clone(), notifications.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let post_id = insert_post_at(&pool, bob.id, "P1", 10).await;

    let first = engagement.like(alice.id, post_id).await.unwrap();
    assert!(!first.already_liked);

    let second = engagement.like(alice.id, post_id).await.unwrap();
    assert!(second.already_liked);

    let like_rows = count_rows(&pool, "SELECT COUNT(*) FROM likes WHERE post_id = $1", post_id).await;
    assert_eq!(like_rows, 1);

    let bob_notifications = notifications.list_for(bob.id, first_page()).await.unwrap();
    assert_eq!(bob_notifications.total, 1);
    assert_eq!(bob_notifications.items[0].actor_id, alice.id);
    assert_eq!(bob_notifications.items[0].verb, "liked your post");
    assert_eq!(bob_notifications.items[0].target().unwrap().kind, TargetKind::Post);
    assert_eq!(bob_notifications.items[0].target().unwrap().id, post_id);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn liking_own_post_emits_no_notification(pool: PgPool) {
    let notifications = NotificationService::new(pool.clone());
    let engagement = EngagementService::new(pool.clone(), notifications.clone());

    let alice = create_user(&pool, "alice").await;
    let post_id = insert_post_at(&pool, alice.id, "mine", 10).await;

    let outcome = engagement.like(alice.id, post_id).await.unwrap();
    assert!(!outcome.already_liked);

    let rows = count_rows(
        &pool,
        "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1",
        alice.id,
    )
    .await;
    assert_eq!(rows, 0);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn unlike_on_never_liked_pair_is_a_noop_success(pool: PgPool) {
    let engagement = EngagementService::new(pool.clone(), NotificationService::new(pool.clone()));

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let post_id = insert_post_at(&pool, bob.id, "P1", 10).await;

    let removed = engagement.unlike(alice.id, post_id).await.unwrap();
    assert!(!removed);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn follow_twice_leaves_exactly_one_edge(pool: PgPool) {
    let follows = FollowService::new(pool.clone(), NotificationService::new(pool.clone()));

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    let first = follows.follow(alice.id, bob.id).await.unwrap();
    assert!(first.changed);

    let second = follows.follow(alice.id, bob.id).await.unwrap();
    assert!(!second.changed);

    let edges = count_rows(
        &pool,
        "SELECT COUNT(*) FROM follows WHERE follower_id = $1",
        alice.id,
    )
    .await;
    assert_eq!(edges, 1);

    // Only the edge creation fans out, never the re-follow.
    let fanned_out = count_rows(
        &pool,
        "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1",
        bob.id,
    )
    .await;
    assert_eq!(fanned_out, 1);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn unfollow_without_edge_reports_no_change(pool: PgPool) {
    let follows = FollowService::new(pool.clone(), NotificationService::new(pool.clone()));

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    let outcome = follows.unfollow(alice.id, bob.id).await.unwrap();
    assert!(!outcome.changed);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn feed_shows_followed_authors_newest_first(pool: PgPool) {
    let follows = FollowService::new(pool.clone(), NotificationService::new(pool.clone()));
    let feed = FeedService::new(pool.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let carol = create_user(&pool, "carol").await;

    follows.follow(alice.id, bob.id).await.unwrap();

    let p1 = insert_post_at(&pool, bob.id, "P1", 10).await;
    let p2 = insert_post_at(&pool, bob.id, "P2", 20).await;

    let page1 = feed.get_feed(alice.id, first_page()).await.unwrap();
    let ids: Vec<Uuid> = page1.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![p2, p1]);

    // A post from an unfollowed author never appears.
    insert_post_at(&pool, carol.id, "P3", 30).await;
    let after = feed.get_feed(alice.id, first_page()).await.unwrap();
    let ids: Vec<Uuid> = after.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![p2, p1]);

    // One page of content; page 2 is empty, not an error.
    let page2 = feed.get_feed(alice.id, page(2)).await.unwrap();
    assert!(page2.items.is_empty());
    assert_eq!(page2.total, 2);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn feed_breaks_timestamp_ties_by_descending_id(pool: PgPool) {
    let follows = FollowService::new(pool.clone(), NotificationService::new(pool.clone()));
    let feed = FeedService::new(pool.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    follows.follow(alice.id, bob.id).await.unwrap();

    let a = insert_post_at(&pool, bob.id, "same-t-a", 10).await;
    let b = insert_post_at(&pool, bob.id, "same-t-b", 10).await;
    let c = insert_post_at(&pool, bob.id, "same-t-c", 10).await;

    let mut expected = vec![a, b, c];
    expected.sort();
    expected.reverse();

    let result = feed.get_feed(alice.id, first_page()).await.unwrap();
    let ids: Vec<Uuid> = result.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn feed_is_empty_when_following_nobody(pool: PgPool) {
    let feed = FeedService::new(pool.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    insert_post_at(&pool, bob.id, "P1", 10).await;

    let result = feed.get_feed(alice.id, first_page()).await.unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
}

#[sqlx::test]
#[ignore] // Requires PostgreSQL
async fn mark_all_read_is_idempotent(pool: PgPool) {
    let notifications = NotificationService::new(pool.clone());
    let follows = FollowService::new(pool.clone(), notifications.clone());
    let engagement = EngagementService::new(pool.clone(), notifications.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let post_id = insert_post_at(&pool, bob.id, "P1", 10).await;

    follows.follow(alice.id, bob.id).await.unwrap();
    engagement.like(alice.id, post_id).await.unwrap();

    let first = notifications.mark_all_read(bob.id).await.unwrap();
    assert_eq!(first, 2);

    let second = notifications.mark_all_read(bob.id).await.unwrap();
    assert_eq!(second, 0);

    // Read notifications sort after unread ones and stay listed.
    let listed = notifications.list_for(bob.id, first_page()).await.unwrap();
    assert_eq!(listed.total, 2);
    assert!(listed.items.iter().all(|n| n.is_read));
}
