#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// Stateless session tokens. The token itself is the only record of a session.
pub trait TokenPort: Send + Sync {
    fn issue(&self, username: &str) -> anyhow::Result<IssuedToken>;

    /// Returns the subject (username) of a valid token.
    fn verify(&self, token: &str) -> Result<String, TokenError>;
}
