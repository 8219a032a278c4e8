/// User service - minimal identity records. Registration and token auth
/// live upstream; this service only manages the rows other tables reference.
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::services::require_non_empty;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, handle: &str) -> Result<User> {
        let handle = require_non_empty("handle", handle)?;

        match user_repo::create_user(&self.pool, handle).await {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                AppError::Conflict(format!("handle '{}' is already taken", handle)),
            ),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<User> {
        user_repo::find_user_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
