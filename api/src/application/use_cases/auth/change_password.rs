use crate::application::error::{AppError, AppResult};
use crate::application::ports::password_hasher::PasswordHasherPort;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::auth::check_password;

pub struct ChangePassword<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
{
    pub repo: &'a R,
    pub hasher: &'a H,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl<'a, R, H> ChangePassword<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
{
    pub async fn execute(&self, username: &str, req: &ChangePasswordRequest) -> AppResult<()> {
        let row = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidToken)?;
        let current = row.password_hash.unwrap_or_default();
        if !self.hasher.verify(&req.current_password, &current) {
            return Err(AppError::InvalidCredentials);
        }
        check_password(&req.new_password)?;
        let hash = self.hasher.hash(&req.new_password)?;
        if !self.repo.update_password_hash(username, &hash).await? {
            return Err(AppError::InvalidToken);
        }
        tracing::info!(%username, "password_changed");
        Ok(())
    }
}
