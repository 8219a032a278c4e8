use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account handle owned by the upstream identity provider
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

/// Post entity - authored content. The author never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - attached to a post, removed when the post is deleted
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Like entity - one row per (user, post) pair, enforced by a unique constraint
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Follow entity - a directed edge from follower to followee
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Follow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Notification entity - a directed event in the append-only log
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub verb: String,
    pub target_kind: String,
    pub target_id: Uuid,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Typed (kind, id) view over the raw target columns. None when the
    /// stored kind is not one this version of the service knows.
    pub fn target(&self) -> Option<NotificationTarget> {
        TargetKind::parse(&self.target_kind).map(|kind| NotificationTarget {
            kind,
            id: self.target_id,
        })
    }
}

/// Kind of object a notification points at.
///
/// Stored as text in the notifications table; a tagged (kind, id) pair
/// rather than an untyped polymorphic reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
    User,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Post => "post",
            TargetKind::Comment => "comment",
            TargetKind::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "post" => Some(TargetKind::Post),
            "comment" => Some(TargetKind::Comment),
            "user" => Some(TargetKind::User),
            _ => None,
        }
    }
}

/// A (kind, id) reference to the object a notification is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationTarget {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl NotificationTarget {
    pub fn post(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Post,
            id,
        }
    }

    pub fn comment(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }

    pub fn user(id: Uuid) -> Self {
        Self {
            kind: TargetKind::User,
            id,
        }
    }
}

/// One page of a list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
}
