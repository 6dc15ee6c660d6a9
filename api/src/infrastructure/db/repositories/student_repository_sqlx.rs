use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::student_repository::StudentRepository;
use crate::domain::students::student::{Student, StudentFields};
use crate::infrastructure::db::DbPool;

pub struct SqlxStudentRepository {
    pub pool: DbPool,
}

impl SqlxStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_student(r: &SqliteRow) -> Student {
    Student {
        id: r.get("id"),
        name: r.get("name"),
        age: r.get("age"),
        major: r.get("major"),
    }
}

#[async_trait]
impl StudentRepository for SqlxStudentRepository {
    async fn list(&self) -> anyhow::Result<Vec<Student>> {
        let rows = sqlx::query(r#"SELECT id, name, age, major FROM students ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(map_student).collect())
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Student>> {
        let row = sqlx::query(r#"SELECT id, name, age, major FROM students WHERE id = ?1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_student))
    }

    async fn create(&self, fields: &StudentFields) -> anyhow::Result<Student> {
        let row = sqlx::query(
            r#"INSERT INTO students (name, age, major) VALUES (?1, ?2, ?3)
               RETURNING id, name, age, major"#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.major.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(map_student(&row))
    }

    async fn update(&self, id: i64, fields: &StudentFields) -> anyhow::Result<Option<Student>> {
        let row = sqlx::query(
            r#"UPDATE students SET name = ?1, age = ?2, major = ?3 WHERE id = ?4
               RETURNING id, name, age, major"#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.major.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_student))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::memory_pool;

    fn fields(name: &str, age: Option<i64>, major: Option<&str>) -> StudentFields {
        StudentFields::new(name, age, major).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let repo = SqlxStudentRepository::new(memory_pool().await);
        let created = repo
            .create(&fields("Ada", Some(21), Some("Mathematics")))
            .await
            .unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.major.as_deref(), Some("Mathematics"));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let repo = SqlxStudentRepository::new(memory_pool().await);
        let s = repo
            .create(&fields("Ada", Some(21), Some("Mathematics")))
            .await
            .unwrap();

        let updated = repo
            .update(s.id, &fields("Ada Lovelace", None, None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.age, None);
        assert_eq!(updated.major, None);

        let missing = repo.update(s.id + 100, &fields("x", None, None)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = SqlxStudentRepository::new(memory_pool().await);
        let a = repo.create(&fields("A", None, None)).await.unwrap();
        let b = repo.create(&fields("B", None, None)).await.unwrap();

        assert!(repo.delete(b.id).await.unwrap());
        assert!(!repo.delete(b.id).await.unwrap());
        assert!(repo.get_by_id(b.id).await.unwrap().is_none());

        let c = repo.create(&fields("C", None, None)).await.unwrap();
        assert!(c.id > b.id);

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }
}
