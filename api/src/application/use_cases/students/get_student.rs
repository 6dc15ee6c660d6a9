use crate::application::error::{AppError, AppResult};
use crate::application::ports::student_repository::StudentRepository;
use crate::domain::students::student::Student;

pub struct GetStudent<'a, R: StudentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StudentRepository + ?Sized> GetStudent<'a, R> {
    pub async fn execute(&self, id: i64) -> AppResult<Student> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound("student"))
    }
}
