use async_trait::async_trait;

use crate::domain::students::student::{Student, StudentFields};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Student>>;

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Student>>;

    async fn create(&self, fields: &StudentFields) -> anyhow::Result<Student>;

    // Full replacement; None if no row has this id
    async fn update(&self, id: i64, fields: &StudentFields) -> anyhow::Result<Option<Student>>;

    // Returns false if nothing was deleted
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
