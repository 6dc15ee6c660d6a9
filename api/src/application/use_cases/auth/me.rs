use crate::application::error::{AppError, AppResult};
use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct GetMe<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetMe<'a, R> {
    // A verified token whose subject no longer exists is treated as invalid.
    pub async fn execute(&self, username: &str) -> AppResult<UserRow> {
        let row = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidToken)?;
        Ok(UserRow {
            password_hash: None,
            ..row
        })
    }
}
