use crate::application::error::{AppError, AppResult};
use crate::application::ports::password_hasher::PasswordHasherPort;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::application::use_cases::auth::{check_password, normalize_username};

pub struct Register<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
{
    pub repo: &'a R,
    pub hasher: &'a H,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R, H> Register<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
{
    pub async fn execute(&self, req: &RegisterRequest) -> AppResult<UserRow> {
        let username = normalize_username(&req.username)?;
        check_password(&req.password)?;
        let hash = self.hasher.hash(&req.password)?;
        let user = self
            .repo
            .create_user(&username, &hash)
            .await?
            .ok_or(AppError::DuplicateUser)?;
        tracing::info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }
}
