/// Database access layer: one module per table.
pub mod comment_repo;
pub mod follow_repo;
pub mod like_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod user_repo;
