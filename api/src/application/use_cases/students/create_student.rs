use crate::application::error::AppResult;
use crate::application::ports::student_repository::StudentRepository;
use crate::application::use_cases::students::StudentInput;
use crate::domain::students::student::Student;

pub struct CreateStudent<'a, R: StudentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StudentRepository + ?Sized> CreateStudent<'a, R> {
    pub async fn execute(&self, input: &StudentInput) -> AppResult<Student> {
        let fields = input.validate()?;
        let student = self.repo.create(&fields).await?;
        tracing::debug!(student_id = student.id, "student_created");
        Ok(student)
    }
}
