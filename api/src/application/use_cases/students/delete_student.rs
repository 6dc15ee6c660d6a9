use crate::application::error::{AppError, AppResult};
use crate::application::ports::student_repository::StudentRepository;

pub struct DeleteStudent<'a, R: StudentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StudentRepository + ?Sized> DeleteStudent<'a, R> {
    pub async fn execute(&self, id: i64) -> AppResult<()> {
        if self.repo.delete(id).await? {
            tracing::debug!(student_id = id, "student_deleted");
            Ok(())
        } else {
            Err(AppError::NotFound("student"))
        }
    }
}
