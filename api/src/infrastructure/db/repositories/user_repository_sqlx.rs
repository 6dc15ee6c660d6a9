use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_user(r: &SqliteRow) -> UserRow {
    UserRow {
        id: r.get("id"),
        username: r.get("username"),
        password_hash: r.try_get("password_hash").ok(),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<UserRow>> {
        let res = sqlx::query(
            r#"INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)
               RETURNING id, username, password_hash, created_at"#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(Some(map_user(&row))),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, username, password_hash, created_at FROM users WHERE username = ?1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn update_password_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query("UPDATE users SET password_hash = ?1 WHERE username = ?2")
            .bind(password_hash)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::memory_pool;

    #[tokio::test]
    async fn duplicate_username_returns_none() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        let first = repo.create_user("alice", "h1").await.unwrap().unwrap();
        assert_eq!(first.username, "alice");
        assert_eq!(first.password_hash.as_deref(), Some("h1"));

        assert!(repo.create_user("alice", "h2").await.unwrap().is_none());

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.password_hash.as_deref(), Some("h1"));
    }

    #[tokio::test]
    async fn updates_password_hash_of_existing_user_only() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        repo.create_user("bob", "old").await.unwrap();

        assert!(repo.update_password_hash("bob", "new").await.unwrap());
        assert!(!repo.update_password_hash("nobody", "x").await.unwrap());

        let bob = repo.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(bob.password_hash.as_deref(), Some("new"));
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }
}
