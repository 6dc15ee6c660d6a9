pub mod change_password;
pub mod login;
pub mod me;
pub mod register;

use crate::application::error::{AppError, AppResult};

pub const USERNAME_MAX_CHARS: usize = 64;
pub const PASSWORD_MAX_CHARS: usize = 256;

pub(crate) fn normalize_username(raw: &str) -> AppResult<String> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username must not be empty".into()));
    }
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "username must be at most {USERNAME_MAX_CHARS} characters"
        )));
    }
    Ok(username.to_string())
}

pub(crate) fn check_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }
    if password.chars().count() > PASSWORD_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "password must be at most {PASSWORD_MAX_CHARS} characters"
        )));
    }
    Ok(())
}
