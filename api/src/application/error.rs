use crate::application::ports::token_port::TokenError;
use crate::domain::students::student::StudentFieldError;

/// Failures surfaced by use cases. Ports report infrastructure trouble as
/// `anyhow::Error`, which lands in [`AppError::Internal`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("username is already taken")]
    DuplicateUser,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("token has expired")]
    ExpiredToken,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("missing or malformed bearer token")]
    InvalidToken,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::ExpiredToken,
            TokenError::InvalidSignature => AppError::InvalidSignature,
            TokenError::Malformed => AppError::InvalidToken,
        }
    }
}

impl From<StudentFieldError> for AppError {
    fn from(err: StudentFieldError) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
