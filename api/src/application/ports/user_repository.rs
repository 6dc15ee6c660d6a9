use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    // None => username already taken
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
    async fn update_password_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<bool>;
}
