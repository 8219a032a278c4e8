/// Business logic layer.
pub mod comments;
pub mod engagement;
pub mod feed;
pub mod follows;
pub mod notifications;
pub mod posts;
pub mod users;

pub use comments::CommentService;
pub use engagement::{EngagementService, LikeOutcome};
pub use feed::FeedService;
pub use follows::{FollowOutcome, FollowService};
pub use notifications::NotificationService;
pub use posts::PostService;
pub use users::UserService;

use crate::error::{AppError, Result};

/// Reject empty or whitespace-only input at the service boundary.
pub(crate) fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_trims() {
        assert_eq!(require_non_empty("title", "  hi  ").unwrap(), "hi");
    }

    #[test]
    fn test_require_non_empty_rejects_whitespace() {
        assert!(matches!(
            require_non_empty("title", "   "),
            Err(AppError::Validation(_))
        ));
    }
}
