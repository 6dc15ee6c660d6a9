use crate::application::error::{AppError, AppResult};
use crate::application::ports::student_repository::StudentRepository;
use crate::application::use_cases::students::StudentInput;
use crate::domain::students::student::Student;

pub struct UpdateStudent<'a, R: StudentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StudentRepository + ?Sized> UpdateStudent<'a, R> {
    pub async fn execute(&self, id: i64, input: &StudentInput) -> AppResult<Student> {
        let fields = input.validate()?;
        let student = self
            .repo
            .update(id, &fields)
            .await?
            .ok_or(AppError::NotFound("student"))?;
        tracing::debug!(student_id = id, "student_updated");
        Ok(student)
    }
}
