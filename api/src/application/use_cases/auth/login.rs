use crate::application::error::{AppError, AppResult};
use crate::application::ports::password_hasher::PasswordHasherPort;
use crate::application::ports::token_port::{IssuedToken, TokenPort};
use crate::application::ports::user_repository::{UserRepository, UserRow};

/// Well-formed Argon2id digest that matches no password. Checked when the
/// username is unknown so that branch costs as much as a real mismatch.
pub const UNKNOWN_USER_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$Y0ea1poJCyWCd+yPum+ZQQ$xpXiZfAOxUeVt8PYmUKuXMwg+YhnsV8eKfFNnXMSqJ8";

pub struct Login<'a, R, H, T>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
    T: TokenPort + ?Sized,
{
    pub repo: &'a R,
    pub hasher: &'a H,
    pub tokens: &'a T,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserRow,
    pub token: IssuedToken,
}

impl<'a, R, H, T> Login<'a, R, H, T>
where
    R: UserRepository + ?Sized,
    H: PasswordHasherPort + ?Sized,
    T: TokenPort + ?Sized,
{
    pub async fn execute(&self, req: &LoginRequest) -> AppResult<LoginOutcome> {
        let username = req.username.trim();
        let row = match self.repo.find_by_username(username).await? {
            Some(r) => r,
            None => {
                let _ = self.hasher.verify(&req.password, UNKNOWN_USER_DIGEST);
                tracing::info!(%username, "login_failed_unknown_user");
                return Err(AppError::InvalidCredentials);
            }
        };
        let hash = row.password_hash.as_deref().unwrap_or(UNKNOWN_USER_DIGEST);
        if !self.hasher.verify(&req.password, hash) {
            tracing::info!(%username, "login_failed_bad_password");
            return Err(AppError::InvalidCredentials);
        }
        let token = self.tokens.issue(&row.username)?;
        tracing::debug!(%username, expires_at = token.expires_at, "login_succeeded");
        Ok(LoginOutcome {
            user: UserRow {
                password_hash: None,
                ..row
            },
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::token_port::TokenError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct OneUser;

    #[async_trait]
    impl UserRepository for OneUser {
        async fn create_user(&self, _: &str, _: &str) -> anyhow::Result<Option<UserRow>> {
            Ok(None)
        }
        async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
            Ok((username == "alice").then(|| UserRow {
                id: 1,
                username: "alice".into(),
                password_hash: Some("stored".into()),
                created_at: Utc::now(),
            }))
        }
        async fn update_password_hash(&self, _: &str, _: &str) -> anyhow::Result<bool> {
            Ok(false)
        }
    }

    #[derive(Default)]
    struct RecordingHasher {
        checked: Mutex<Vec<String>>,
    }

    impl PasswordHasherPort for RecordingHasher {
        fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
            Ok(plaintext.to_string())
        }
        fn verify(&self, plaintext: &str, digest: &str) -> bool {
            self.checked.lock().unwrap().push(digest.to_string());
            plaintext == "pw123" && digest == "stored"
        }
    }

    struct FixedTokens;

    impl TokenPort for FixedTokens {
        fn issue(&self, username: &str) -> anyhow::Result<IssuedToken> {
            Ok(IssuedToken {
                token: format!("token-for-{username}"),
                expires_in: 60,
                expires_at: 0,
            })
        }
        fn verify(&self, _: &str) -> Result<String, TokenError> {
            Err(TokenError::Malformed)
        }
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn unknown_user_still_runs_a_verification() {
        let hasher = RecordingHasher::default();
        let uc = Login {
            repo: &OneUser,
            hasher: &hasher,
            tokens: &FixedTokens,
        };
        let err = uc.execute(&request("mallory", "pw123")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(*hasher.checked.lock().unwrap(), vec![UNKNOWN_USER_DIGEST]);
    }

    #[tokio::test]
    async fn known_user_is_checked_against_stored_digest() {
        let hasher = RecordingHasher::default();
        let uc = Login {
            repo: &OneUser,
            hasher: &hasher,
            tokens: &FixedTokens,
        };
        let bad = uc.execute(&request("alice", "nope")).await.unwrap_err();
        assert!(matches!(bad, AppError::InvalidCredentials));
        let ok = uc.execute(&request(" alice ", "pw123")).await.unwrap();
        assert_eq!(ok.token.token, "token-for-alice");
        assert!(ok.user.password_hash.is_none());
        assert_eq!(*hasher.checked.lock().unwrap(), vec!["stored", "stored"]);
    }
}
